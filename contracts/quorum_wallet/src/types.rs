use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Quorum,
    SignerCount,
    Signers,
    Signer(Address),
    ExecutedCount,
    ProposalCount,
    Proposal(u64),
}

/// Numeric tag of a proposal's payload, as seen by off-chain clients.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TxType {
    TokenTransfer = 0,
    QuorumUpdate = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenTransfer {
    pub amount: i128,
    pub recipient: Address,
    pub asset: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalKind {
    TokenTransfer(TokenTransfer),
    QuorumUpdate(u32),
}

impl ProposalKind {
    pub fn tx_type(&self) -> TxType {
        match self {
            ProposalKind::TokenTransfer(_) => TxType::TokenTransfer,
            ProposalKind::QuorumUpdate(_) => TxType::QuorumUpdate,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub kind: ProposalKind,
    /// Always equal to `approvers.len()`.
    pub approval_count: u32,
    pub approvers: Vec<Address>,
    pub is_completed: bool,
    pub created_at: u64,
    pub executed_at: Option<u64>,
}

impl Proposal {
    pub fn has_approved(&self, signer: &Address) -> bool {
        self.approvers.contains(signer)
    }
}
