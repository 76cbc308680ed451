//! Fluent builder API for seeding runs.
//!
//! The [`SeedPlan`] wires the generators and the [`crate::db::Seeder`]
//! together and runs every phase in dependency order.

mod plan;

pub use plan::{SeedOutcome, SeedPlan};
