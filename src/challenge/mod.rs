mod errors;
mod source;
mod types;

pub use errors::ChallengeError;
pub use source::{ChallengeSource, HttpChallengeSource};
pub use types::Challenge;
