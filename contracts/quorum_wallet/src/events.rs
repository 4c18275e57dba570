//! Contract events for every state change of the wallet.
//!
//! Each struct is a `#[contractevent]`; the snake_case struct name is the
//! leading topic and the proposal id, where present, is a second topic so
//! indexers can follow one proposal through its lifecycle.

use soroban_sdk::{contractevent, Address, Env};

use crate::types::{TokenTransfer, TxType};

#[contractevent]
#[derive(Clone, Debug)]
pub struct WalletInitialized {
    pub signer_count: u32,
    pub quorum: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalCreated {
    #[topic]
    pub proposal_id: u64,
    pub proposer: Address,
    pub tx_type: TxType,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalApproved {
    #[topic]
    pub proposal_id: u64,
    pub signer: Address,
    pub approval_count: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ProposalExecuted {
    #[topic]
    pub proposal_id: u64,
    pub tx_type: TxType,
    pub approval_count: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct TransferExecuted {
    #[topic]
    pub proposal_id: u64,
    pub asset: Address,
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct QuorumUpdated {
    #[topic]
    pub proposal_id: u64,
    pub previous: u32,
    pub quorum: u32,
}

pub fn wallet_initialized(env: &Env, signer_count: u32, quorum: u32) {
    WalletInitialized {
        signer_count,
        quorum,
    }
    .publish(env);
}

pub fn proposal_created(env: &Env, proposal_id: u64, proposer: &Address, tx_type: TxType) {
    ProposalCreated {
        proposal_id,
        proposer: proposer.clone(),
        tx_type,
    }
    .publish(env);
}

pub fn proposal_approved(env: &Env, proposal_id: u64, signer: &Address, approval_count: u32) {
    ProposalApproved {
        proposal_id,
        signer: signer.clone(),
        approval_count,
    }
    .publish(env);
}

pub fn proposal_executed(env: &Env, proposal_id: u64, tx_type: TxType, approval_count: u32) {
    ProposalExecuted {
        proposal_id,
        tx_type,
        approval_count,
    }
    .publish(env);
}

pub fn transfer_executed(env: &Env, proposal_id: u64, transfer: &TokenTransfer) {
    TransferExecuted {
        proposal_id,
        asset: transfer.asset.clone(),
        recipient: transfer.recipient.clone(),
        amount: transfer.amount,
    }
    .publish(env);
}

pub fn quorum_updated(env: &Env, proposal_id: u64, previous: u32, quorum: u32) {
    QuorumUpdated {
        proposal_id,
        previous,
        quorum,
    }
    .publish(env);
}
