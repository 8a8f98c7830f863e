//! End-to-end tests for the AlgoStage workspace.
//!
//! Everything here drives the public [`algostage_engine::Stage`] surface
//! the way a frontend would: commands in, snapshots and step batches out.

#[cfg(test)]
mod lifecycle;
#[cfg(test)]
mod scenarios;
