//! Ceremony coordination module
//!
//! The core of the crate: one complete authentication attempt (sign-in or
//! sign-up) from challenge fetch through outcome notification, driven by a
//! single coordinator that admits at most one ceremony at a time.
//!
//! Submodules:
//! - `types`: ceremony kind, state machine, and classified outcomes
//! - `errors`: error type for coordination operations
//! - `requests`: construction of the platform request descriptors
//! - `coordinator`: the `CeremonyCoordinator` itself

mod coordinator;
mod errors;
mod requests;
mod types;

pub use coordinator::CeremonyCoordinator;
pub use errors::CeremonyError;
pub use types::{AuthenticationOutcome, CeremonyKind, CeremonyState};

pub(crate) use requests::{build_sign_in_requests, build_sign_up_requests};
