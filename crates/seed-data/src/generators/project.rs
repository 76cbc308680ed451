//! Project and project-student link generation.

use std::collections::HashSet;

use rand::Rng;
use time::Date;

use conecta::models::ProjectStatus;

use crate::faker::FakeProvider;

/// Deadline window, counted forward from today.
const DEADLINE_MIN_DAYS: i64 = 15;
const DEADLINE_MAX_DAYS: i64 = 180;

/// Generated project data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub title: String,
    pub description: String,
    pub deadline: Date,
    pub status: ProjectStatus,
    /// Inline feedback note; only the loose schema has this column.
    pub feedback_note: String,
    /// Attachments column of the strict schema; never seeded.
    pub attachments: Option<String>,
    pub course_id: i32,
    pub proposal_id: i32,
}

/// Generates projects tied to an existing course and proposal.
pub struct ProjectGenerator;

impl ProjectGenerator {
    /// Creates a new project generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` projects with foreign keys drawn from the pools.
    ///
    /// Returns an empty batch when either pool is empty.
    pub fn generate_batch(
        &self,
        count: usize,
        course_pool: &[i32],
        proposal_pool: &[i32],
        faker: &impl FakeProvider,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedProject> {
        if course_pool.is_empty() || proposal_pool.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| GeneratedProject {
                title: faker.sentence(3, rng),
                description: faker.paragraph(2, rng),
                deadline: faker.date_within(DEADLINE_MIN_DAYS..=DEADLINE_MAX_DAYS, rng),
                status: *faker.pick(&ProjectStatus::ALL, rng),
                feedback_note: faker.sentence(6, rng),
                attachments: None,
                course_id: *faker.pick(course_pool, rng),
                proposal_id: *faker.pick(proposal_pool, rng),
            })
            .collect()
    }
}

impl Default for ProjectGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generated project-student enrollment.
#[derive(Debug, Clone)]
pub struct GeneratedProjectStudent {
    pub project_id: i32,
    pub user_id: i32,
}

/// Generates unique (project, user) enrollments by rejection sampling.
pub struct ProjectStudentGenerator;

impl ProjectStudentGenerator {
    /// Creates a new link generator.
    pub fn new() -> Self {
        Self
    }

    /// Samples up to `pairs` unique links. Every draw counts against a budget
    /// of `3 * pairs` attempts, so the result can be shorter than requested
    /// when the pools offer few distinct combinations.
    pub fn generate_batch(
        &self,
        pairs: usize,
        project_pool: &[i32],
        user_pool: &[i32],
        faker: &impl FakeProvider,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedProjectStudent> {
        if project_pool.is_empty() || user_pool.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut links = Vec::new();
        let max_attempts = pairs * 3;
        let mut attempts = 0;

        while links.len() < pairs && attempts < max_attempts {
            attempts += 1;
            let project_id = *faker.pick(project_pool, rng);
            let user_id = *faker.pick(user_pool, rng);
            if seen.insert((project_id, user_id)) {
                links.push(GeneratedProjectStudent {
                    project_id,
                    user_id,
                });
            }
        }

        links
    }
}

impl Default for ProjectStudentGenerator {
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
    fn test_generate_projects() {
        let project_gen = ProjectGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let courses = vec![1, 2];
        let proposals = vec![10, 20, 30];
        let projects = project_gen.generate_batch(40, &courses, &proposals, &EnFaker, &mut rng);

        assert_eq!(projects.len(), 40);

        let today = OffsetDateTime::now_utc().date();
        for project in &projects {
            assert!(courses.contains(&project.course_id));
            assert!(proposals.contains(&project.proposal_id));
            assert!(project.deadline >= today + Duration::days(DEADLINE_MIN_DAYS - 1));
            assert!(project.deadline <= today + Duration::days(DEADLINE_MAX_DAYS + 1));
        }
    }

    #[test]
    fn test_projects_need_both_pools() {
        let project_gen = ProjectGenerator::new();
        let mut rng = rand::thread_rng();

        assert!(
            project_gen
                .generate_batch(10, &[], &[1], &EnFaker, &mut rng)
                .is_empty()
        );
        assert!(
            project_gen
                .generate_batch(10, &[1], &[], &EnFaker, &mut rng)
                .is_empty()
        );
    }

    #[test]
    fn test_links_are_unique() {
        let link_gen = ProjectStudentGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let projects: Vec<i32> = (1..=200).collect();
        let users: Vec<i32> = (1..=100).collect();
        let links = link_gen.generate_batch(120, &projects, &users, &EnFaker, &mut rng);

        // Pools this large leave plenty of room for 120 distinct pairs
        assert_eq!(links.len(), 120);

        let pairs: HashSet<_> = links.iter().map(|l| (l.project_id, l.user_id)).collect();
        assert_eq!(pairs.len(), links.len());
    }

    #[test]
    fn test_links_bounded_by_small_pools() {
        let link_gen = ProjectStudentGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let links = link_gen.generate_batch(120, &[1, 2], &[1, 2], &EnFaker, &mut rng);

        // Only 4 distinct pairs exist; the attempt budget stops the loop
        assert!(links.len() <= 4);

        let pairs: HashSet<_> = links.iter().map(|l| (l.project_id, l.user_id)).collect();
        assert_eq!(pairs.len(), links.len());
    }

    #[test]
    fn test_links_empty_pools() {
        let link_gen = ProjectStudentGenerator::new();
        let mut rng = rand::thread_rng();

        assert!(
            link_gen
                .generate_batch(10, &[], &[1], &EnFaker, &mut rng)
                .is_empty()
        );
        assert!(
            link_gen
                .generate_batch(10, &[1], &[], &EnFaker, &mut rng)
                .is_empty()
        );
    }
}
