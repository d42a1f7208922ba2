//! Caller capability checks.
//!
//! Callers authenticate with `require_auth` at the entry point; these helpers
//! only decide what the authenticated address is allowed to do.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::ElectionError;
use crate::voter;

pub(crate) const ADMIN: Symbol = symbol_short!("ADMIN");

pub(crate) fn admin(env: &Env) -> Result<Address, ElectionError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ElectionError::NotInitialized)
}

pub(crate) fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

/// `true` when `caller` is the election administrator.
pub fn is_administrator(env: &Env, caller: &Address) -> bool {
    match admin(env) {
        Ok(admin) => admin == *caller,
        Err(_) => false,
    }
}

pub(crate) fn require_admin(env: &Env, caller: &Address) -> Result<(), ElectionError> {
    if !is_administrator(env, caller) {
        return Err(ElectionError::Unauthorized);
    }
    Ok(())
}

pub(crate) fn require_voter(env: &Env, caller: &Address) -> Result<(), ElectionError> {
    if !voter::is_registered(env, caller) {
        return Err(ElectionError::NotAVoter);
    }
    Ok(())
}
