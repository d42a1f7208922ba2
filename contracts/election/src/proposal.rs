//! Proposal list: an append-only sequence whose index is the permanent id.

use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol};

use crate::errors::ElectionError;

// ── Storage key prefixes ─────────────────────────────────────────────────────

pub(crate) const PROPOSAL_CTR: Symbol = symbol_short!("PROP_CTR");
pub(crate) const PROPOSAL: Symbol = symbol_short!("PROP");

// TTL: ~60 days at 5s/ledger
const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

/// Description of the placeholder proposal created at index 0.
pub const GENESIS: &str = "GENESIS";

/// Upper bound on a proposal description, in bytes.
pub const MAX_DESCRIPTION_LEN: u32 = 280;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

impl Proposal {
    pub fn new(description: String) -> Self {
        Self {
            description,
            vote_count: 0,
        }
    }
}

/// Rejects empty and oversized descriptions.
pub fn validate_description(description: &String) -> Result<(), ElectionError> {
    if description.len() == 0 {
        return Err(ElectionError::EmptyProposal);
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ElectionError::DescriptionTooLong);
    }
    Ok(())
}

// ── Storage helpers ──────────────────────────────────────────────────────────

/// Number of stored proposals, genesis included.
pub fn count(env: &Env) -> u32 {
    env.storage().instance().get(&PROPOSAL_CTR).unwrap_or(0u32)
}

fn proposal_key(id: u32) -> (Symbol, u32) {
    (PROPOSAL, id)
}

pub(crate) fn store(env: &Env, id: u32, proposal: &Proposal) {
    let key = proposal_key(id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Append `proposal` and return its index.
pub(crate) fn push(env: &Env, proposal: &Proposal) -> u32 {
    let id = count(env);
    store(env, id, proposal);
    env.storage().instance().set(&PROPOSAL_CTR, &(id + 1));
    id
}

pub fn load(env: &Env, id: u32) -> Option<Proposal> {
    if id >= count(env) {
        return None;
    }
    env.storage().persistent().get(&proposal_key(id))
}

/// Vote counts in index order, for tallying.
pub(crate) fn vote_counts(env: &Env) -> soroban_sdk::Vec<u32> {
    let mut counts = soroban_sdk::Vec::new(env);
    for id in 0..count(env) {
        let votes = load(env, id).map(|p| p.vote_count).unwrap_or(0);
        counts.push_back(votes);
    }
    counts
}
