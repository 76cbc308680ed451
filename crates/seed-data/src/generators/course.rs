//! Course generation.

use rand::Rng;

use crate::faker::FakeProvider;

/// Generated course data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedCourse {
    pub name: String,
    pub description: String,
}

/// Generates courses named after professional fields.
pub struct CourseGenerator;

impl CourseGenerator {
    /// Creates a new course generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a single course.
    pub fn generate(&self, faker: &impl FakeProvider, rng: &mut impl Rng) -> GeneratedCourse {
        GeneratedCourse {
            name: format!("Curso de {}", faker.job_field(rng)),
            description: faker.sentence(8, rng),
        }
    }

    /// Generates multiple courses.
    pub fn generate_batch(
        &self,
        count: usize,
        faker: &impl FakeProvider,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedCourse> {
        (0..count).map(|_| self.generate(faker, rng)).collect()
    }
}

impl Default for CourseGenerator {
    fn default() -> Self {
        Self::new()
    }
}
