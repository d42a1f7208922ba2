#![no_std]

//! # Election
//!
//! A single-election governance contract: the administrator registers
//! voters, voters submit proposals and cast one vote each, and the
//! administrator tallies the result by plurality.
//!
//! - **Workflow**: RegisteringVoters → ProposalsRegistrationStarted →
//!   ProposalsRegistrationEnded → VotingSessionStarted → VotingSessionEnded →
//!   VotesTallied, advanced one step at a time by the administrator only
//! - **Genesis proposal**: index 0 is always `"GENESIS"`
//! - **Single vote**: each registered voter increments exactly one tally, once
//! - **Tally**: first proposal holding the maximum vote count wins
//!
//! One deployed instance is one election.

pub mod access;
pub mod errors;
pub mod events;
pub mod proposal;
pub mod tally;
pub mod voter;
pub mod workflow;

use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String, Symbol};

pub use errors::ElectionError;
pub use proposal::{Proposal, GENESIS, MAX_DESCRIPTION_LEN};
pub use voter::Voter;
pub use workflow::WorkflowStatus;

// ── Storage key constants ─────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const WINNER: Symbol = symbol_short!("WINNER");

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct ElectionContract;

#[contractimpl]
impl ElectionContract {
    // ── Initialisation ────────────────────────────────────────────────────────

    /// Open a new election administered by `admin`.
    ///
    /// Starts in `RegisteringVoters` with the genesis proposal at index 0.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ElectionError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ElectionError::AlreadyInitialized);
        }
        admin.require_auth();

        access::set_admin(&env, &admin);
        workflow::store(&env, WorkflowStatus::RegisteringVoters);
        env.storage().instance().set(&WINNER, &0u32);
        proposal::push(
            &env,
            &Proposal::new(String::from_str(&env, GENESIS)),
        );
        env.storage().instance().set(&INITIALIZED, &true);

        log!(&env, "election initialized", admin);
        Ok(())
    }

    /// Hand the administrator role to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ElectionError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_admin(&env, &caller)?;

        access::set_admin(&env, &new_owner);
        events::emit_ownership_transferred(&env, &caller, &new_owner);
        Ok(())
    }

    // ── Voter registration ────────────────────────────────────────────────────

    /// Register `voter`. Only allowed while registering voters.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), ElectionError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_admin(&env, &caller)?;
        workflow::ensure_phase(workflow::load(&env), WorkflowStatus::RegisteringVoters)?;

        if voter::is_registered(&env, &voter) {
            return Err(ElectionError::AlreadyRegistered);
        }

        voter::store(&env, &voter, &Voter::registered());
        events::emit_voter_registered(&env, &voter);

        log!(&env, "voter registered", voter);
        Ok(())
    }

    /// Look up any address. The caller must itself be a registered voter.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, ElectionError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_voter(&env, &caller)?;

        Ok(voter::load(&env, &voter))
    }

    // ── Proposal registration ─────────────────────────────────────────────────

    /// Append a proposal and return its index (the first submission gets 1).
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, ElectionError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_voter(&env, &caller)?;
        workflow::ensure_phase(
            workflow::load(&env),
            WorkflowStatus::ProposalsRegistrationStarted,
        )?;
        proposal::validate_description(&description)?;

        let id = proposal::push(&env, &Proposal::new(description));
        events::emit_proposal_registered(&env, id);

        Ok(id)
    }

    pub fn get_one_proposal(
        env: Env,
        caller: Address,
        proposal_id: u32,
    ) -> Result<Proposal, ElectionError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_voter(&env, &caller)?;

        proposal::load(&env, proposal_id).ok_or(ElectionError::ProposalNotFound)
    }

    /// Number of proposals, genesis included.
    pub fn proposal_count(env: Env) -> u32 {
        proposal::count(&env)
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    /// Cast the caller's single vote for `proposal_id`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), ElectionError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_voter(&env, &caller)?;
        workflow::ensure_phase(workflow::load(&env), WorkflowStatus::VotingSessionStarted)?;

        let mut record = voter::load(&env, &caller);
        if record.has_voted {
            return Err(ElectionError::AlreadyVoted);
        }
        let mut chosen =
            proposal::load(&env, proposal_id).ok_or(ElectionError::ProposalNotFound)?;

        record.has_voted = true;
        record.voted_proposal_id = proposal_id;
        chosen.vote_count = chosen.vote_count.saturating_add(1);

        voter::store(&env, &caller, &record);
        proposal::store(&env, proposal_id, &chosen);
        events::emit_voted(&env, &caller, proposal_id);

        Ok(())
    }

    // ── Phase transitions ─────────────────────────────────────────────────────

    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::advance(&env, &caller, WorkflowStatus::ProposalsRegistrationStarted)
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::advance(&env, &caller, WorkflowStatus::ProposalsRegistrationEnded)
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::advance(&env, &caller, WorkflowStatus::VotingSessionStarted)
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::advance(&env, &caller, WorkflowStatus::VotingSessionEnded)
    }

    /// Close the election: pick the winner and move to `VotesTallied`.
    ///
    /// Scans every proposal, genesis included, in index order; ties go to the
    /// lowest index.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, ElectionError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_admin(&env, &caller)?;

        let current = workflow::load(&env);
        workflow::ensure_advance(current, WorkflowStatus::VotesTallied)?;

        let winner = tally::first_max_index(proposal::vote_counts(&env).iter());
        env.storage().instance().set(&WINNER, &winner);
        workflow::store(&env, WorkflowStatus::VotesTallied);

        events::emit_status_change(&env, current, WorkflowStatus::VotesTallied);
        events::emit_votes_tallied(&env, winner);

        log!(&env, "votes tallied", winner);
        Ok(winner)
    }

    // ── View functions ────────────────────────────────────────────────────────

    pub fn workflow_status(env: Env) -> WorkflowStatus {
        workflow::load(&env)
    }

    /// Stored winner. Reads 0 until the votes are tallied; check
    /// `workflow_status` before trusting it.
    pub fn winning_proposal_id(env: Env) -> u32 {
        env.storage().instance().get(&WINNER).unwrap_or(0u32)
    }

    /// The winning proposal record, available once tallied.
    pub fn winning_proposal(env: Env) -> Result<Proposal, ElectionError> {
        Self::require_initialized(&env)?;
        workflow::ensure_phase(workflow::load(&env), WorkflowStatus::VotesTallied)?;

        proposal::load(&env, Self::winning_proposal_id(env.clone()))
            .ok_or(ElectionError::ProposalNotFound)
    }

    pub fn owner(env: Env) -> Result<Address, ElectionError> {
        access::admin(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Number of events published so far; the last event carries this value
    /// as its sequence topic.
    pub fn event_count(env: Env) -> u64 {
        events::count(&env)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ElectionError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ElectionError::NotInitialized);
        }
        Ok(())
    }

    fn advance(env: &Env, caller: &Address, target: WorkflowStatus) -> Result<(), ElectionError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        access::require_admin(env, caller)?;

        let current = workflow::load(env);
        workflow::ensure_advance(current, target)?;

        workflow::store(env, target);
        events::emit_status_change(env, current, target);

        log!(env, "workflow status changed", current, target);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
