//! # Quorum Wallet
//!
//! A shared account controlled by a fixed set of signers. Moving funds or
//! changing the quorum takes a proposal from one signer and approvals from
//! enough distinct signers to reach the quorum; the proposal executes on
//! the approval that reaches it, exactly once.

#![no_std]

mod approval;
mod dispatch;
mod errors;
mod events;
mod ledger;
mod quorum;
mod registry;
mod types;
mod wallet;

pub use errors::WalletError;
pub use types::{Proposal, ProposalKind, TokenTransfer, TxType};
pub use wallet::{QuorumWallet, QuorumWalletClient};
