use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not one of the wallet's signers.
    Unauthorized = 3,
    /// Proposal id is 0 or above the highest allocated id.
    OutOfBounds = 4,
    DuplicateApproval = 5,
    AlreadyCompleted = 6,
    /// Wallet balance in the proposal's asset is below the amount.
    InsufficientFunds = 7,
    /// Empty or duplicated signer list, or a quorum outside `1..=signers`.
    InvalidConfig = 8,
    /// The asset contract rejected the transfer or balance query.
    ExecutionFailed = 9,
    InvalidAmount = 10,
    QuorumNotReached = 11,
}
