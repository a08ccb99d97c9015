// Demo workflow: collect inputs, call the remote matcher, normalize the response.
// All traffic to the matching service goes through client.rs.

pub mod client;
pub mod error;
pub mod handlers;
pub mod input;
pub mod normalize;

pub use client::{analyze, AnalysisOutcome, MatchClient, MatchService};
pub use error::MatchError;
