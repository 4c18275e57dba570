//! Approval pipeline.
//!
//! Every approval is checked, recorded and then evaluated against the
//! quorum in force at that moment. Reaching the quorum runs the
//! dispatcher synchronously; only a successful dispatch completes the
//! proposal, so `is_completed` flips at most once.
//!
//! When dispatch fails the recorded approval stays in place and the error
//! is returned. A proposal left at quorum this way can be pushed again by
//! a new signer's approval or by [`retry_execution`].

use soroban_sdk::{log, Address, Env};

use crate::dispatch;
use crate::errors::WalletError;
use crate::events;
use crate::ledger;
use crate::quorum;
use crate::registry;
use crate::types::{DataKey, Proposal};

/// Records `signer`'s approval of `proposal_id` and executes the proposal
/// once it has reached the quorum.
///
/// Returns the proposal as stored after the call.
///
/// # Errors
/// Checked in this order:
/// - [`WalletError::OutOfBounds`] if the proposal does not exist.
/// - [`WalletError::Unauthorized`] if `signer` is not a signer.
/// - [`WalletError::AlreadyCompleted`] if the proposal was executed.
/// - [`WalletError::DuplicateApproval`] if `signer` already approved.
/// - Any dispatcher error once the quorum is reached. The approval is
///   kept in that case.
pub fn approve(env: &Env, signer: &Address, proposal_id: u64) -> Result<Proposal, WalletError> {
    let mut proposal = ledger::get_proposal(env, proposal_id)?;
    registry::require_signer(env, signer)?;

    if proposal.is_completed {
        return Err(WalletError::AlreadyCompleted);
    }
    if proposal.has_approved(signer) {
        return Err(WalletError::DuplicateApproval);
    }

    proposal.approvers.push_back(signer.clone());
    proposal.approval_count = proposal.approvers.len();
    ledger::save(env, &proposal);
    events::proposal_approved(env, proposal_id, signer, proposal.approval_count);

    execute_if_ready(env, &mut proposal)?;
    Ok(proposal)
}

/// Re-runs dispatch for a pending proposal that already holds enough
/// approvals, without recording a new one.
///
/// # Errors
/// - [`WalletError::OutOfBounds`], [`WalletError::Unauthorized`] and
///   [`WalletError::AlreadyCompleted`] as for [`approve`].
/// - [`WalletError::QuorumNotReached`] if the proposal is below quorum.
/// - Any dispatcher error.
pub fn retry_execution(env: &Env, caller: &Address, proposal_id: u64) -> Result<Proposal, WalletError> {
    let mut proposal = ledger::get_proposal(env, proposal_id)?;
    registry::require_signer(env, caller)?;

    if proposal.is_completed {
        return Err(WalletError::AlreadyCompleted);
    }
    if proposal.approval_count < quorum::current(env)? {
        return Err(WalletError::QuorumNotReached);
    }

    execute_if_ready(env, &mut proposal)?;
    Ok(proposal)
}

/// Dispatches `proposal` if its approvals meet the current quorum and
/// marks it completed on success. Below quorum this is a no-op.
pub(crate) fn execute_if_ready(env: &Env, proposal: &mut Proposal) -> Result<(), WalletError> {
    if proposal.approval_count < quorum::current(env)? {
        return Ok(());
    }

    dispatch::execute(env, proposal)?;

    proposal.is_completed = true;
    proposal.executed_at = Some(env.ledger().timestamp());
    ledger::save(env, proposal);
    bump_executed_count(env);

    events::proposal_executed(env, proposal.id, proposal.kind.tx_type(), proposal.approval_count);
    log!(env, "proposal {} executed", proposal.id);
    Ok(())
}

pub fn executed_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ExecutedCount)
        .unwrap_or(0u64)
}

fn bump_executed_count(env: &Env) {
    let count = executed_count(env);
    env.storage()
        .instance()
        .set(&DataKey::ExecutedCount, &(count + 1));
}
