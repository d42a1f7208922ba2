//! Voter registry.
//!
//! Every address implicitly has a default (unregistered) record; only
//! addresses added by the administrator are ever written to storage.
//! `is_registered` is the single source of membership truth.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const VOTER: Symbol = symbol_short!("VOTER");

// TTL: ~60 days at 5s/ledger
const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

/// Per-address voting record.
///
/// `voted_proposal_id` is only meaningful while `has_voted` is true; an
/// unset id reads as 0, the genesis proposal.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: u32,
}

impl Voter {
    pub fn registered() -> Self {
        Self {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn voter_key(voter: &Address) -> (Symbol, Address) {
    (VOTER, voter.clone())
}

pub(crate) fn store(env: &Env, address: &Address, voter: &Voter) {
    let key = voter_key(address);
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Record for `address`, or the default unregistered record.
pub fn load(env: &Env, address: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&voter_key(address))
        .unwrap_or_default()
}

pub(crate) fn is_registered(env: &Env, address: &Address) -> bool {
    load(env, address).is_registered
}
