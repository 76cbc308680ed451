//! Feedback generation.

use rand::Rng;
use time::Date;

use crate::faker::FakeProvider;

/// How many days back a feedback date may fall.
const FEEDBACK_WINDOW_DAYS: i64 = 60;

/// Generated feedback data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedFeedback {
    pub comment: String,
    /// Attachments are never seeded; the column stays NULL.
    pub attachments: Option<String>,
    pub given_on: Date,
    pub user_id: i32,
    pub project_id: i32,
}

/// Generates feedback on existing projects.
pub struct FeedbackGenerator;

impl FeedbackGenerator {
    /// Creates a new feedback generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` feedback entries with authors and projects drawn
    /// from the pools.
    ///
    /// Returns an empty batch when either pool is empty.
    pub fn generate_batch(
        &self,
        count: usize,
        user_pool: &[i32],
        project_pool: &[i32],
        faker: &impl FakeProvider,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedFeedback> {
        if user_pool.is_empty() || project_pool.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| GeneratedFeedback {
                comment: faker.sentence(10, rng),
                attachments: None,
                given_on: faker.date_within(-FEEDBACK_WINDOW_DAYS..=0, rng),
                user_id: *faker.pick(user_pool, rng),
                project_id: *faker.pick(project_pool, rng),
            })
            .collect()
    }
}

impl Default for FeedbackGenerator {
    fn default() -> Self {
        Self::new()
    }
}
