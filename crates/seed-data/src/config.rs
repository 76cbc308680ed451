//! Configuration types for seeding runs.

use serde::{Deserialize, Serialize};

use conecta::schema::SchemaVariant;

/// Row counts and insertion settings for one seeding run.
///
/// The defaults reproduce the canonical development dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of users to generate.
    pub user_count: usize,

    /// Number of courses to generate.
    pub course_count: usize,

    /// Number of proposals to generate.
    pub proposal_count: usize,

    /// Number of projects to generate.
    pub project_count: usize,

    /// Number of feedback entries to generate.
    pub feedback_count: usize,

    /// Target number of unique project-student links. The seeded count can
    /// come out lower; link sampling gives up after a bounded number of
    /// attempts.
    pub project_student_count: usize,

    /// Number of notifications to generate.
    pub notification_count: usize,

    /// Rows per INSERT statement.
    pub batch_size: usize,

    /// Schema variant the generated rows must conform to.
    pub variant: SchemaVariant,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: 100,
            course_count: 10,
            proposal_count: 1000,
            project_count: 200,
            feedback_count: 150,
            project_student_count: 120,
            notification_count: 120,
            batch_size: 100,
            variant: SchemaVariant::default(),
        }
    }
}
