#![no_main]

use arbitrary::Arbitrary;
use election::{proposal, voter, ElectionContract, ElectionContractClient, WorkflowStatus};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

/// Actions modelling every state-changing election entry point.
///
/// Workflow calls carry their own signer so the fuzzer also drives
/// unauthorised and out-of-order transitions.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    AddVoter { user: u8 },
    AddProposal { user: u8, len: u16 },
    SetVote { user: u8, proposal_id: u8 },
    StartProposals { as_admin: bool },
    EndProposals { as_admin: bool },
    StartVoting { as_admin: bool },
    EndVoting { as_admin: bool },
    Tally { as_admin: bool },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(ElectionContract, ());
    let client = ElectionContractClient::new(&env, &contract_id);

    if client.try_initialize(&admin).is_err() {
        return;
    }

    let users: Vec<Address> = (0..5).map(|_| Address::generate(&env)).collect();
    let mut status = client.workflow_status();

    for action in actions {
        let pick = |i: u8| &users[i as usize % users.len()];
        let signer = |as_admin: bool| if as_admin { admin.clone() } else { users[0].clone() };
        match action {
            FuzzAction::AddVoter { user } => {
                let _ = client.try_add_voter(&admin, pick(user));
            }
            FuzzAction::AddProposal { user, len } => {
                let text = "p".repeat(len as usize % 400);
                let _ = client.try_add_proposal(pick(user), &String::from_str(&env, &text));
            }
            FuzzAction::SetVote { user, proposal_id } => {
                let _ = client.try_set_vote(pick(user), &(proposal_id as u32));
            }
            FuzzAction::StartProposals { as_admin } => {
                let _ = client.try_start_proposals_registering(&signer(as_admin));
            }
            FuzzAction::EndProposals { as_admin } => {
                let _ = client.try_end_proposals_registering(&signer(as_admin));
            }
            FuzzAction::StartVoting { as_admin } => {
                let _ = client.try_start_voting_session(&signer(as_admin));
            }
            FuzzAction::EndVoting { as_admin } => {
                let _ = client.try_end_voting_session(&signer(as_admin));
            }
            FuzzAction::Tally { as_admin } => {
                let _ = client.try_tally_votes(&signer(as_admin));
            }
        }

        // ── Post-action invariant checks ──
        let next = client.workflow_status();
        assert!(
            next as u32 == status as u32 || next as u32 == status as u32 + 1,
            "INVARIANT VIOLATION: status jumped from {:?} to {:?}",
            status,
            next
        );
        status = next;

        let (counts, ballots) = env.as_contract(&contract_id, || {
            let counts: Vec<u32> = (0..proposal::count(&env))
                .filter_map(|id| proposal::load(&env, id))
                .map(|p| p.vote_count)
                .collect();
            let ballots = users
                .iter()
                .map(|u| voter::load(&env, u))
                .filter(|v| v.has_voted)
                .count() as u64;
            (counts, ballots)
        });

        let total: u64 = counts.iter().map(|c| u64::from(*c)).sum();
        assert_eq!(total, ballots, "INVARIANT VIOLATION: tallies != ballots cast");

        if status == WorkflowStatus::VotesTallied {
            let winner = client.winning_proposal_id();
            let best = counts.iter().copied().max().unwrap_or(0);
            let first = counts.iter().position(|c| *c == best).unwrap_or(0) as u32;
            assert_eq!(winner, first, "INVARIANT VIOLATION: winner is not the first maximum");
        }
    }
});
