//! Core data structures for the colony simulation.

pub mod cell;
pub mod rules;
