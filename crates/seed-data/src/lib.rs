//! Synthetic data generation for the Conecta project-proposal tracker.
//!
//! This crate fills a provisioned Conecta database with realistic users,
//! courses, proposals, projects, feedback, project-student links, and
//! notifications, in dependency order, for development and integration
//! testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let outcome = SeedPlan::smoke_test()
//!     .with_variant(SchemaVariant::Strict)
//!     .build(&pool, &EnFaker, &mut rng)
//!     .await?;
//!
//! println!("seeded {} proposals", outcome.proposal_ids.len());
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod faker;
pub mod generators;

// Re-export core types from the conecta crate
pub use conecta::models::{ProjectStatus, ProposalStatus, UserRole};
pub use conecta::schema::SchemaVariant;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{SeedOutcome, SeedPlan};
    pub use crate::config::SeedConfig;
    pub use crate::db::Seeder;
    pub use crate::faker::{EnFaker, FakeProvider};
    pub use crate::generators::{
        CourseGenerator, FeedbackGenerator, NotificationGenerator, ProjectGenerator,
        ProjectStudentGenerator, ProposalGenerator, UserGenerator,
    };
    pub use crate::{ProjectStatus, ProposalStatus, SchemaVariant, UserRole};
}
