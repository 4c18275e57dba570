use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use crate::approval;
use crate::errors::WalletError;
use crate::events;
use crate::ledger;
use crate::quorum;
use crate::registry;
use crate::types::Proposal;

#[contract]
pub struct QuorumWallet;

#[contractimpl]
impl QuorumWallet {
    /// Sets the fixed signer set and the initial quorum.
    ///
    /// # Errors
    /// - `AlreadyInitialized` on a second call.
    /// - `InvalidConfig` for an empty or duplicated signer list, or a quorum
    ///   outside `1..=signers.len()`.
    pub fn initialize(env: Env, quorum: u32, signers: Vec<Address>) -> Result<(), WalletError> {
        registry::store_signers(&env, &signers, quorum)?;

        events::wallet_initialized(&env, signers.len(), quorum);
        log!(&env, "initialize signers={} quorum={}", signers.len(), quorum);
        Ok(())
    }

    /// Proposes sending `amount` of `asset` from the wallet to `recipient`.
    /// The proposer's approval is recorded with the proposal.
    pub fn propose_transfer(
        env: Env,
        proposer: Address,
        amount: i128,
        recipient: Address,
        asset: Address,
    ) -> Result<u64, WalletError> {
        proposer.require_auth();
        registry::require_initialized(&env)?;

        let mut proposal = ledger::create_transfer_proposal(&env, &proposer, amount, recipient, asset)?;
        approval::execute_if_ready(&env, &mut proposal)?;

        log!(&env, "propose_transfer id={} amount={}", proposal.id, amount);
        Ok(proposal.id)
    }

    /// Proposes changing the quorum to `new_quorum`.
    pub fn propose_quorum_update(
        env: Env,
        proposer: Address,
        new_quorum: u32,
    ) -> Result<u64, WalletError> {
        proposer.require_auth();
        registry::require_initialized(&env)?;

        let mut proposal = ledger::create_quorum_update_proposal(&env, &proposer, new_quorum)?;
        approval::execute_if_ready(&env, &mut proposal)?;

        log!(&env, "propose_quorum_update id={} quorum={}", proposal.id, new_quorum);
        Ok(proposal.id)
    }

    pub fn approve(env: Env, signer: Address, proposal_id: u64) -> Result<(), WalletError> {
        signer.require_auth();
        registry::require_initialized(&env)?;

        let proposal = approval::approve(&env, &signer, proposal_id)?;
        log!(
            &env,
            "approve id={} approvals={} completed={}",
            proposal_id,
            proposal.approval_count,
            proposal.is_completed
        );
        Ok(())
    }

    /// Dispatches a pending proposal that already has enough approvals,
    /// e.g. after a failed transfer or a lowered quorum.
    pub fn retry_execution(env: Env, caller: Address, proposal_id: u64) -> Result<(), WalletError> {
        caller.require_auth();
        registry::require_initialized(&env)?;

        approval::retry_execution(&env, &caller, proposal_id)?;
        Ok(())
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, WalletError> {
        registry::require_initialized(&env)?;
        ledger::get_proposal(&env, proposal_id)
    }

    pub fn has_approved(env: Env, proposal_id: u64, signer: Address) -> Result<bool, WalletError> {
        registry::require_initialized(&env)?;
        Ok(ledger::get_proposal(&env, proposal_id)?.has_approved(&signer))
    }

    pub fn proposal_count(env: Env) -> Result<u64, WalletError> {
        registry::require_initialized(&env)?;
        Ok(ledger::proposal_count(&env))
    }

    pub fn executed_count(env: Env) -> Result<u64, WalletError> {
        registry::require_initialized(&env)?;
        Ok(approval::executed_count(&env))
    }

    pub fn quorum(env: Env) -> Result<u32, WalletError> {
        quorum::current(&env)
    }

    pub fn signer_count(env: Env) -> Result<u32, WalletError> {
        registry::signer_count(&env)
    }

    pub fn signers(env: Env) -> Result<Vec<Address>, WalletError> {
        registry::signers(&env)
    }

    pub fn is_signer(env: Env, identity: Address) -> Result<bool, WalletError> {
        registry::require_initialized(&env)?;
        Ok(registry::is_valid_signer(&env, &identity))
    }
}
