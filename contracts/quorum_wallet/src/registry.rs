//! Signer registry.
//!
//! The signer set is written once by [`store_signers`] during
//! initialization and never changes afterwards. Membership is kept both as
//! an ordered list (for listing) and as one `Signer(Address)` flag per
//! member (for constant-cost checks).

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::DataKey;

pub fn require_initialized(env: &Env) -> Result<(), WalletError> {
    if !env.storage().instance().has(&DataKey::Initialized) {
        return Err(WalletError::NotInitialized);
    }
    Ok(())
}

/// Validates and persists the initial signer set together with `quorum`.
///
/// # Errors
/// - [`WalletError::AlreadyInitialized`] on a second call.
/// - [`WalletError::InvalidConfig`] if the list is empty, holds duplicates,
///   or `quorum` is outside `1..=signers.len()`.
pub fn store_signers(env: &Env, signers: &Vec<Address>, quorum: u32) -> Result<(), WalletError> {
    if env.storage().instance().has(&DataKey::Initialized) {
        return Err(WalletError::AlreadyInitialized);
    }

    if signers.is_empty() {
        return Err(WalletError::InvalidConfig);
    }

    if quorum == 0 || quorum > signers.len() {
        return Err(WalletError::InvalidConfig);
    }

    for i in 0..signers.len() {
        for j in (i + 1)..signers.len() {
            if signers.get_unchecked(i) == signers.get_unchecked(j) {
                return Err(WalletError::InvalidConfig);
            }
        }
    }

    let storage = env.storage().instance();
    storage.set(&DataKey::Initialized, &true);
    storage.set(&DataKey::SignerCount, &signers.len());
    storage.set(&DataKey::Signers, signers);
    storage.set(&DataKey::ExecutedCount, &0u64);
    for signer in signers.iter() {
        storage.set(&DataKey::Signer(signer), &true);
    }
    crate::quorum::write(env, quorum);

    Ok(())
}

pub fn is_valid_signer(env: &Env, identity: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Signer(identity.clone()))
}

pub fn require_signer(env: &Env, identity: &Address) -> Result<(), WalletError> {
    if !is_valid_signer(env, identity) {
        return Err(WalletError::Unauthorized);
    }
    Ok(())
}

pub fn signer_count(env: &Env) -> Result<u32, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::SignerCount)
        .ok_or(WalletError::NotInitialized)
}

pub fn signers(env: &Env) -> Result<Vec<Address>, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .ok_or(WalletError::NotInitialized)
}
