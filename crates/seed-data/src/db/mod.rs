//! Database integration for seeding.
//!
//! The [`Seeder`] inserts generated rows in bulk and hands back the
//! database-assigned ids so later phases can reference them.

mod seeder;

pub use seeder::{SeedError, Seeder};
