//! Confquery Engine - evaluates condition trees against document collections
//!
//! The entry point is the [`Compile`] trait: every node of a condition tree
//! (leaf conditions, groups, and the item enum) exposes
//! `compile(documents) -> MatchSet`, so trees compose identically at every
//! nesting depth. Compilation is a pure function of its inputs; documents are
//! borrowed, never copied or mutated.

pub mod compare;
pub mod compile;
pub mod lookup;

pub use compile::{Compile, MatchSet};
