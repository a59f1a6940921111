//! Moves and neighborhoods.
//!
//! A [`Move`] is a delta over a solution; a [`Neighborhood`] generates
//! the moves reachable from a solution. Two generation styles are
//! supported through adapters:
//!
//! - [`Eager`] wraps an [`EagerNeighborhood`] that materializes every
//!   move (cheap to compare, costly to enumerate in bulk).
//! - [`Lazy`] wraps a [`LazyNeighborhood`] whose [`LazyMove`]s yield
//!   their successor on demand, so large move spaces are explored
//!   without materializing them.
//!
//! Running out of moves is reported with `None` or an empty iterator,
//! never as an error.

mod eager;
mod lazy;
mod types;

pub use eager::{Eager, EagerNeighborhood};
pub use lazy::{Lazy, LazyMoves, LazyNeighborhood};
pub use types::{LazyMove, Move, Neighborhood};
