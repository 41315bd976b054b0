//! The smaller companion exercises.
//!
//! Each submodule is one self-contained kata operating on in-memory data,
//! with no state shared between calls.

pub mod compass;
pub mod dominoes;
pub mod permutations;
pub mod profit;
pub mod ranges;
pub mod shortener;
pub mod zigzag;
