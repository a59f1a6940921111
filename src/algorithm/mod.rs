//! Algorithm orchestration seams.
//!
//! A run starts from a [`SolutionBuilder`], completes the solution with
//! a [`Constructive`] and hands it to improvers. [`SimpleAlgorithm`]
//! does exactly that once; [`Vns`](crate::vns::Vns) adds shaking.

mod simple;
mod types;

pub use simple::SimpleAlgorithm;
pub use types::{Algorithm, Constructive, SolutionBuilder};

pub(crate) use types::improve_all;
