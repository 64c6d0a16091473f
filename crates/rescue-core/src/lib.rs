//! Core types and definitions for the lunar rescue simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, mission state, snapshots, events, and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod mission;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
