//! Proposal generation.

use rand::Rng;
use time::Date;

use conecta::models::ProposalStatus;

use crate::faker::FakeProvider;

/// How many days back a submission date may fall.
const SUBMISSION_WINDOW_DAYS: i64 = 120;

/// Generated proposal data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedProposal {
    pub title: String,
    pub description: String,
    pub submitted_on: Date,
    pub status: ProposalStatus,
    /// Attachments are never seeded; the column stays NULL.
    pub attachments: Option<String>,
    pub user_id: i32,
}

/// Generates proposals submitted by existing users.
pub struct ProposalGenerator;

impl ProposalGenerator {
    /// Creates a new proposal generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` proposals with submitters drawn from `user_pool`.
    ///
    /// Returns an empty batch when the pool is empty.
    pub fn generate_batch(
        &self,
        count: usize,
        user_pool: &[i32],
        faker: &impl FakeProvider,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedProposal> {
        if user_pool.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| GeneratedProposal {
                title: faker.sentence(4, rng),
                description: faker.paragraph(3, rng),
                submitted_on: faker.date_within(-SUBMISSION_WINDOW_DAYS..=0, rng),
                status: *faker.pick(&ProposalStatus::ALL, rng),
                attachments: None,
                user_id: *faker.pick(user_pool, rng),
            })
            .collect()
    }
}

impl Default for ProposalGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::{Duration, OffsetDateTime};

    use crate::faker::EnFaker;

    use super::*;

    #[test]
    fn test_generate_batch() {
        let proposal_gen = ProposalGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let user_pool = vec![1, 2, 3, 7];
        let proposals = proposal_gen.generate_batch(50, &user_pool, &EnFaker, &mut rng);

        assert_eq!(proposals.len(), 50);
        for proposal in &proposals {
            assert!(!proposal.title.is_empty());
            assert!(user_pool.contains(&proposal.user_id));
            assert!(proposal.attachments.is_none());
        }
    }

    #[test]
    fn test_submission_dates_in_window() {
        let proposal_gen = ProposalGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let proposals = proposal_gen.generate_batch(100, &[1], &EnFaker, &mut rng);

        let today = OffsetDateTime::now_utc().date();
        for proposal in &proposals {
            assert!(proposal.submitted_on <= today + Duration::days(1));
            assert!(proposal.submitted_on >= today - Duration::days(SUBMISSION_WINDOW_DAYS + 1));
        }
    }

    #[test]
    fn test_empty_user_pool() {
        let proposal_gen = ProposalGenerator::new();
        let mut rng = rand::thread_rng();
        let proposals = proposal_gen.generate_batch(50, &[], &EnFaker, &mut rng);

        assert!(proposals.is_empty());
    }
}
