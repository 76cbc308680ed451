//! Notification generation.

use rand::Rng;
use time::Date;

use crate::faker::FakeProvider;

/// How many days back a notification date may fall.
const NOTIFICATION_WINDOW_DAYS: i64 = 30;

/// Generated notification data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedNotification {
    pub message: String,
    pub sent_on: Date,
    pub user_id: i32,
}

/// Generates notifications addressed to existing users.
pub struct NotificationGenerator;

impl NotificationGenerator {
    /// Creates a new notification generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` notifications with recipients drawn from `user_pool`.
    ///
    /// Returns an empty batch when the pool is empty.
    pub fn generate_batch(
        &self,
        count: usize,
        user_pool: &[i32],
        faker: &impl FakeProvider,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedNotification> {
        if user_pool.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| GeneratedNotification {
                message: faker.sentence(7, rng),
                sent_on: faker.date_within(-NOTIFICATION_WINDOW_DAYS..=0, rng),
                user_id: *faker.pick(user_pool, rng),
            })
            .collect()
    }
}

impl Default for NotificationGenerator {
    fn default() -> Self {
        Self::new()
    }
}
