//! Fluent plan for a complete seeding run.

use rand::Rng;
use sqlx::PgPool;

use conecta::schema::SchemaVariant;

use crate::config::SeedConfig;
use crate::db::{SeedError, Seeder};
use crate::faker::FakeProvider;
use crate::generators::{
    CourseGenerator, FeedbackGenerator, NotificationGenerator, ProjectGenerator,
    ProjectStudentGenerator, ProposalGenerator, UserGenConfig, UserGenerator,
};

/// Identifier pools produced by a seeding run, in phase order.
#[derive(Debug, Default)]
pub struct SeedOutcome {
    pub user_ids: Vec<i32>,
    pub course_ids: Vec<i32>,
    pub proposal_ids: Vec<i32>,
    pub project_ids: Vec<i32>,
    pub feedback_ids: Vec<i32>,
    pub project_student_ids: Vec<i32>,
    pub notification_ids: Vec<i32>,
}

/// Builder for a complete dependency-ordered seeding run.
///
/// # Example
///
/// ```rust,ignore
/// let outcome = SeedPlan::new()
///     .with_users(100)
///     .with_proposals(1000)
///     .with_variant(SchemaVariant::Strict)
///     .build(&pool, &EnFaker, &mut rng)
///     .await?;
/// ```
pub struct SeedPlan {
    config: SeedConfig,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedPlan {
    /// Creates a plan with the canonical development counts.
    pub fn new() -> Self {
        Self {
            config: SeedConfig::default(),
        }
    }

    /// Creates a plan from an existing configuration.
    pub fn from_config(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Sets the number of users to generate.
    pub fn with_users(mut self, count: usize) -> Self {
        self.config.user_count = count;
        self
    }

    /// Sets the number of courses to generate.
    pub fn with_courses(mut self, count: usize) -> Self {
        self.config.course_count = count;
        self
    }

    /// Sets the number of proposals to generate.
    pub fn with_proposals(mut self, count: usize) -> Self {
        self.config.proposal_count = count;
        self
    }

    /// Sets the number of projects to generate.
    pub fn with_projects(mut self, count: usize) -> Self {
        self.config.project_count = count;
        self
    }

    /// Sets the number of feedback entries to generate.
    pub fn with_feedback(mut self, count: usize) -> Self {
        self.config.feedback_count = count;
        self
    }

    /// Sets the target number of project-student links.
    pub fn with_project_students(mut self, count: usize) -> Self {
        self.config.project_student_count = count;
        self
    }

    /// Sets the number of notifications to generate.
    pub fn with_notifications(mut self, count: usize) -> Self {
        self.config.notification_count = count;
        self
    }

    /// Sets the row count per INSERT statement.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    /// Sets the schema variant the rows must conform to.
    pub fn with_variant(mut self, variant: SchemaVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Runs every phase in dependency order and returns the id pools.
    ///
    /// A phase whose prerequisite pool came out empty contributes an empty
    /// pool of its own; no error is raised.
    pub async fn build(
        self,
        pool: &PgPool,
        faker: &impl FakeProvider,
        rng: &mut impl Rng,
    ) -> Result<SeedOutcome, SeedError> {
        let seeder =
            Seeder::new(pool.clone(), self.config.variant).with_batch_size(self.config.batch_size);

        let user_gen = UserGenerator::with_config(UserGenConfig::for_variant(self.config.variant));
        let users = user_gen.generate_batch(self.config.user_count, faker, rng);
        let user_ids = seeder.seed_users(&users).await?;

        let courses = CourseGenerator::new().generate_batch(self.config.course_count, faker, rng);
        let course_ids = seeder.seed_courses(&courses).await?;

        let proposals = ProposalGenerator::new().generate_batch(
            self.config.proposal_count,
            &user_ids,
            faker,
            rng,
        );
        let proposal_ids = seeder.seed_proposals(&proposals).await?;

        let projects = ProjectGenerator::new().generate_batch(
            self.config.project_count,
            &course_ids,
            &proposal_ids,
            faker,
            rng,
        );
        let project_ids = seeder.seed_projects(&projects).await?;

        let feedback = FeedbackGenerator::new().generate_batch(
            self.config.feedback_count,
            &user_ids,
            &project_ids,
            faker,
            rng,
        );
        let feedback_ids = seeder.seed_feedback(&feedback).await?;

        let links = ProjectStudentGenerator::new().generate_batch(
            self.config.project_student_count,
            &project_ids,
            &user_ids,
            faker,
            rng,
        );
        let project_student_ids = seeder.seed_project_students(&links).await?;

        let notifications = NotificationGenerator::new().generate_batch(
            self.config.notification_count,
            &user_ids,
            faker,
            rng,
        );
        let notification_ids = seeder.seed_notifications(&notifications).await?;

        Ok(SeedOutcome {
            user_ids,
            course_ids,
            proposal_ids,
            project_ids,
            feedback_ids,
            project_student_ids,
            notification_ids,
        })
    }
}

/// Preset plans for common needs.
impl SeedPlan {
    /// Small dataset for quick smoke checks.
    pub fn smoke_test() -> Self {
        Self::new()
            .with_users(10)
            .with_courses(3)
            .with_proposals(25)
            .with_projects(8)
            .with_feedback(6)
            .with_project_students(10)
            .with_notifications(12)
    }

    /// Large dataset for load experiments.
    pub fn stress_test() -> Self {
        Self::new()
            .with_users(1000)
            .with_courses(25)
            .with_proposals(10_000)
            .with_projects(2000)
            .with_feedback(1500)
            .with_project_students(1200)
            .with_notifications(1200)
    }
}
