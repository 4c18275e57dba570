//! The wallet's quorum threshold.
//!
//! Only initialization and the dispatcher's `QuorumUpdate` arm write it.

use soroban_sdk::Env;

use crate::errors::WalletError;
use crate::registry;
use crate::types::DataKey;

pub fn current(env: &Env) -> Result<u32, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Quorum)
        .ok_or(WalletError::NotInitialized)
}

/// Checks `1 <= new_quorum <= signer_count`.
pub fn validate(env: &Env, new_quorum: u32) -> Result<(), WalletError> {
    let signer_count = registry::signer_count(env)?;
    if new_quorum == 0 || new_quorum > signer_count {
        return Err(WalletError::InvalidConfig);
    }
    Ok(())
}

/// Validates and stores `new_quorum`, returning the previous value.
pub fn update(env: &Env, new_quorum: u32) -> Result<u32, WalletError> {
    validate(env, new_quorum)?;
    let previous = current(env)?;
    write(env, new_quorum);
    Ok(previous)
}

pub(crate) fn write(env: &Env, quorum: u32) {
    env.storage().instance().set(&DataKey::Quorum, &quorum);
}
