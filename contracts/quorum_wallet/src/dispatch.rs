use soroban_sdk::{log, token, Env};

use crate::errors::WalletError;
use crate::events;
use crate::ledger;
use crate::quorum;
use crate::types::{Proposal, ProposalKind, TokenTransfer};

/// Applies the effect of `proposal`. This is the only code path that moves
/// wallet funds or changes the quorum.
pub fn execute(env: &Env, proposal: &Proposal) -> Result<(), WalletError> {
    match &proposal.kind {
        ProposalKind::TokenTransfer(transfer) => execute_token_transfer(env, proposal.id, transfer),
        ProposalKind::QuorumUpdate(new_quorum) => execute_quorum_update(env, proposal.id, *new_quorum),
    }
}

fn execute_token_transfer(
    env: &Env,
    proposal_id: u64,
    transfer: &TokenTransfer,
) -> Result<(), WalletError> {
    // Other proposals may have drained the wallet since this one was created.
    if ledger::wallet_balance(env, &transfer.asset)? < transfer.amount {
        log!(env, "transfer {} short of funds", proposal_id);
        return Err(WalletError::InsufficientFunds);
    }

    let token_client = token::TokenClient::new(env, &transfer.asset);
    let wallet = env.current_contract_address();
    match token_client.try_transfer(&wallet, &transfer.recipient, &transfer.amount) {
        Ok(Ok(())) => {}
        _ => return Err(WalletError::ExecutionFailed),
    }

    events::transfer_executed(env, proposal_id, transfer);
    Ok(())
}

fn execute_quorum_update(env: &Env, proposal_id: u64, new_quorum: u32) -> Result<(), WalletError> {
    let previous = quorum::update(env, new_quorum)?;

    events::quorum_updated(env, proposal_id, previous, new_quorum);
    Ok(())
}
