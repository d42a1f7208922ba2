//! Error codes returned by every election entry point.

use soroban_sdk::contracterror;

/// Election error codes.
///
/// # Code ranges
/// | Range  | Purpose                        |
/// |--------|--------------------------------|
/// | 1 – 2  | Lifecycle / initialisation     |
/// | 3 – 4  | Authorisation                  |
/// | 5 – 6  | Duplicate action               |
/// | 7 – 8  | Workflow phase                 |
/// | 9 – 11 | Proposal lookup and validation |
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ElectionError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the election administrator.
    Unauthorized = 3,
    /// Caller is not a registered voter.
    NotAVoter = 4,
    AlreadyRegistered = 5,
    AlreadyVoted = 6,
    /// Operation is not allowed in the current workflow status.
    WrongPhase = 7,
    /// Phase advance requested from anything but the immediate predecessor.
    InvalidPhaseTransition = 8,
    ProposalNotFound = 9,
    EmptyProposal = 10,
    DescriptionTooLong = 11,
}
