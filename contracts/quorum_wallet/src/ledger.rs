//! Append-only proposal ledger.
//!
//! Ids are allocated from `ProposalCount`, starting at 1. Proposals are
//! kept in persistent storage forever; only the approval pipeline rewrites
//! an existing entry.

use soroban_sdk::{token, Address, Env, Vec};

use crate::errors::WalletError;
use crate::events;
use crate::registry;
use crate::types::{DataKey, Proposal, ProposalKind, TokenTransfer};

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const PROPOSAL_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PROPOSAL_TTL_EXTEND_TO: u32 = 90 * DAY_IN_LEDGERS;

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

/// Records a transfer of `amount` of `asset` from the wallet to `recipient`.
///
/// # Errors
/// - [`WalletError::Unauthorized`] if `proposer` is not a signer.
/// - [`WalletError::InvalidAmount`] if `amount` is negative.
/// - [`WalletError::InsufficientFunds`] if the wallet holds less than
///   `amount` of `asset` right now.
pub fn create_transfer_proposal(
    env: &Env,
    proposer: &Address,
    amount: i128,
    recipient: Address,
    asset: Address,
) -> Result<Proposal, WalletError> {
    registry::require_signer(env, proposer)?;

    if amount < 0 {
        return Err(WalletError::InvalidAmount);
    }

    if wallet_balance(env, &asset)? < amount {
        return Err(WalletError::InsufficientFunds);
    }

    let kind = ProposalKind::TokenTransfer(TokenTransfer {
        amount,
        recipient,
        asset,
    });
    Ok(append(env, proposer, kind))
}

/// Records a change of the wallet quorum to `new_quorum`.
///
/// # Errors
/// - [`WalletError::Unauthorized`] if `proposer` is not a signer.
/// - [`WalletError::InvalidConfig`] if `new_quorum` is 0 or exceeds the
///   signer count.
pub fn create_quorum_update_proposal(
    env: &Env,
    proposer: &Address,
    new_quorum: u32,
) -> Result<Proposal, WalletError> {
    registry::require_signer(env, proposer)?;
    crate::quorum::validate(env, new_quorum)?;

    Ok(append(env, proposer, ProposalKind::QuorumUpdate(new_quorum)))
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, WalletError> {
    if proposal_id == 0 || proposal_id > proposal_count(env) {
        return Err(WalletError::OutOfBounds);
    }
    let key = DataKey::Proposal(proposal_id);
    let proposal = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(WalletError::OutOfBounds)?;
    extend_ttl(env, &key);
    Ok(proposal)
}

pub(crate) fn save(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    extend_ttl(env, &key);
}

/// Keeps a proposal, and the wallet instance it belongs to, out of archival
/// for as long as it keeps being touched.
fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PROPOSAL_TTL_THRESHOLD, PROPOSAL_TTL_EXTEND_TO);
    env.storage()
        .instance()
        .extend_ttl(PROPOSAL_TTL_THRESHOLD, PROPOSAL_TTL_EXTEND_TO);
}

/// Balance of the wallet contract itself in `asset`.
pub(crate) fn wallet_balance(env: &Env, asset: &Address) -> Result<i128, WalletError> {
    let client = token::TokenClient::new(env, asset);
    match client.try_balance(&env.current_contract_address()) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(WalletError::ExecutionFailed),
    }
}

fn append(env: &Env, proposer: &Address, kind: ProposalKind) -> Proposal {
    let proposal_id = proposal_count(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &proposal_id);

    // The proposer's approval is part of the initial state.
    let mut approvers = Vec::new(env);
    approvers.push_back(proposer.clone());

    let proposal = Proposal {
        id: proposal_id,
        proposer: proposer.clone(),
        kind,
        approval_count: approvers.len(),
        approvers,
        is_completed: false,
        created_at: env.ledger().timestamp(),
        executed_at: None,
    };
    save(env, &proposal);

    events::proposal_created(env, proposal_id, proposer, proposal.kind.tx_type());
    proposal
}
