//! Solution improvers.
//!
//! [`LocalSearch`] repeatedly applies improving moves from one or more
//! neighborhoods until none is left, using either best-improvement or
//! first-improvement move selection.

mod local_search;
mod types;

pub use local_search::{LocalSearch, MoveSelection};
pub use types::Improver;
