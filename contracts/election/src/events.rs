//! Structured event publishing for the election contract.
//!
//! Every topic is `(name, sequence)`; the sequence is a per-instance counter
//! incremented once per published event, so observers can detect gaps and
//! replay notifications in operation order.

#![allow(deprecated)]

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::workflow::WorkflowStatus;

const EVT_CTR: Symbol = symbol_short!("EVT_CTR");

// ── Event payloads ───────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegisteredEvent {
    pub voter_address: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRegisteredEvent {
    pub proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotedEvent {
    pub voter: Address,
    pub proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkflowStatusChangeEvent {
    pub previous_status: WorkflowStatus,
    pub new_status: WorkflowStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotesTalliedEvent {
    pub winning_proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

// ── Sequence ─────────────────────────────────────────────────────────────────

/// Number of events published by this instance so far.
pub fn count(env: &Env) -> u64 {
    env.storage().instance().get(&EVT_CTR).unwrap_or(0u64)
}

fn next_sequence(env: &Env) -> u64 {
    let seq = count(env).saturating_add(1);
    env.storage().instance().set(&EVT_CTR, &seq);
    seq
}

// ── Publishers ───────────────────────────────────────────────────────────────

pub fn emit_voter_registered(env: &Env, voter: &Address) {
    let seq = next_sequence(env);
    env.events().publish(
        (symbol_short!("VOTER_REG"), seq),
        VoterRegisteredEvent {
            voter_address: voter.clone(),
        },
    );
}

pub fn emit_proposal_registered(env: &Env, proposal_id: u32) {
    let seq = next_sequence(env);
    env.events().publish(
        (symbol_short!("PROP_REG"), seq),
        ProposalRegisteredEvent { proposal_id },
    );
}

pub fn emit_voted(env: &Env, voter: &Address, proposal_id: u32) {
    let seq = next_sequence(env);
    env.events().publish(
        (symbol_short!("VOTED"), seq),
        VotedEvent {
            voter: voter.clone(),
            proposal_id,
        },
    );
}

pub fn emit_status_change(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    let seq = next_sequence(env);
    env.events().publish(
        (symbol_short!("WF_STATUS"), seq),
        WorkflowStatusChangeEvent {
            previous_status: previous,
            new_status: new,
        },
    );
}

pub fn emit_votes_tallied(env: &Env, winning_proposal_id: u32) {
    let seq = next_sequence(env);
    env.events().publish(
        (symbol_short!("TALLIED"), seq),
        VotesTalliedEvent {
            winning_proposal_id,
        },
    );
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    let seq = next_sequence(env);
    env.events().publish(
        (symbol_short!("OWNER"), seq),
        OwnershipTransferredEvent {
            previous_owner: previous_owner.clone(),
            new_owner: new_owner.clone(),
        },
    );
}
