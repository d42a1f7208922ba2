//! Workflow status of an election and its transition rules.
//!
//! ```text
//! RegisteringVoters ──► ProposalsRegistrationStarted ──► ProposalsRegistrationEnded
//!                                                                  │
//!   VotesTallied ◄── VotingSessionEnded ◄── VotingSessionStarted ◄─┘
//! ```
//!
//! The status only moves forward, one step per administrator call.

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::errors::ElectionError;

const STATUS: Symbol = symbol_short!("STATUS");

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The status that directly follows `self`, or `None` once tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

/// Succeeds only when `target` is the immediate successor of `current`.
pub fn ensure_advance(
    current: WorkflowStatus,
    target: WorkflowStatus,
) -> Result<(), ElectionError> {
    if current.next() != Some(target) {
        return Err(ElectionError::InvalidPhaseTransition);
    }
    Ok(())
}

/// Succeeds only when the election is exactly in `required`.
pub fn ensure_phase(
    current: WorkflowStatus,
    required: WorkflowStatus,
) -> Result<(), ElectionError> {
    if current != required {
        return Err(ElectionError::WrongPhase);
    }
    Ok(())
}

// ── Storage helpers ──────────────────────────────────────────────────────────

pub(crate) fn load(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&STATUS)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub(crate) fn store(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&STATUS, &status);
}
