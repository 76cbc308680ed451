//! User generation with variant-specific role vocabularies.

use std::collections::HashSet;

use rand::Rng;

use conecta::models::{LOOSE_ROLES, UserRole};
use conecta::schema::SchemaVariant;

use crate::faker::FakeProvider;

/// Generated user data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Only stored by the strict schema; the loose one has no such column.
    pub active: bool,
    pub role: Option<String>,
}

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Role values to draw from.
    pub role_pool: Vec<String>,
    /// Probability that the role is left empty.
    pub missing_role_rate: f64,
    /// Probability that the account is active.
    pub active_rate: f64,
    /// Password length in characters.
    pub password_length: usize,
}

impl UserGenConfig {
    /// Vocabulary for the loose schema: three free-text roles, absent for
    /// about a quarter of the accounts.
    pub fn loose() -> Self {
        Self {
            role_pool: LOOSE_ROLES.iter().map(|role| role.to_string()).collect(),
            missing_role_rate: 0.25,
            active_rate: 1.0,
            password_length: 10,
        }
    }

    /// Vocabulary for the strict schema: the five CHECK-constrained profiles,
    /// always present, with most accounts active.
    pub fn strict() -> Self {
        Self {
            role_pool: UserRole::ALL
                .iter()
                .map(|role| role.as_str().to_string())
                .collect(),
            missing_role_rate: 0.0,
            active_rate: 0.9,
            password_length: 10,
        }
    }

    /// Configuration matching the given schema variant.
    pub fn for_variant(variant: SchemaVariant) -> Self {
        match variant {
            SchemaVariant::Loose => Self::loose(),
            SchemaVariant::Strict => Self::strict(),
        }
    }
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self::strict()
    }
}

/// Generates account data for seeding.
pub struct UserGenerator {
    config: UserGenConfig,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single user. The email is random but not guaranteed
    /// unique; use [`UserGenerator::generate_batch`] when uniqueness matters.
    pub fn generate(&self, faker: &impl FakeProvider, rng: &mut impl Rng) -> GeneratedUser {
        let role = if self.config.role_pool.is_empty()
            || rng.r#gen::<f64>() < self.config.missing_role_rate
        {
            None
        } else {
            Some(faker.pick(&self.config.role_pool, rng).clone())
        };

        GeneratedUser {
            name: faker.full_name(rng),
            email: faker.email(rng),
            password: faker.password(self.config.password_length, rng),
            active: rng.r#gen::<f64>() < self.config.active_rate,
            role,
        }
    }

    /// Generates multiple users with emails unique within the batch. The
    /// rare collision is broken with a numeric prefix on the local part.
    pub fn generate_batch(
        &self,
        count: usize,
        faker: &impl FakeProvider,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedUser> {
        let mut seen = HashSet::with_capacity(count);

        (0..count)
            .map(|i| {
                let mut user = self.generate(faker, rng);
                if !seen.insert(user.email.clone()) {
                    user.email = format!("{i}.{}", user.email);
                    seen.insert(user.email.clone());
                }
                user
            })
            .collect()
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}
