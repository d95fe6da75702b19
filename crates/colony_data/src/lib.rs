//! Plain data types shared by the colony engine and its front-ends.

pub mod data;

pub use data::cell::{Cell, Position, Strategy};
pub use data::rules::{Payoff, Preset, UpdateRule, WeightFunction};
