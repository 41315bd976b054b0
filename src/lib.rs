//! A collection of small algorithmic exercises.
//!
//! The two centerpiece units are brace expansion ([`expand`]) and the
//! snaking word search ([`search`]); the [`katas`] module collects the
//! smaller companion exercises. Each unit is a pure function of its
//! inputs with no shared state between calls.

pub mod app;
pub mod expand;
pub mod katas;
pub mod search;
