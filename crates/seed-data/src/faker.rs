//! Fake-value provider for the generators.
//!
//! Every free-text field and every randomized date goes through
//! [`FakeProvider`], so generators stay independent of the concrete faker.
//! [`EnFaker`] is the default implementation on top of the `fake` crate.

use std::ops::RangeInclusive;

use fake::Fake;
use fake::faker::internet::en::{FreeEmail, Password};
use fake::faker::job::en::Field;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;
use rand::Rng;
use time::{Date, Duration, OffsetDateTime};

/// Source of synthetic field values.
///
/// The RNG is threaded through explicitly, like in the generators, so a
/// seeded run produces the same rows every time.
pub trait FakeProvider {
    /// A person's full name.
    fn full_name(&self, rng: &mut impl Rng) -> String;

    /// An email address. Uniqueness within a batch is the caller's concern.
    fn email(&self, rng: &mut impl Rng) -> String;

    /// A password of exactly `length` characters.
    fn password(&self, length: usize, rng: &mut impl Rng) -> String;

    /// A professional field, e.g. for naming courses.
    fn job_field(&self, rng: &mut impl Rng) -> String;

    /// A sentence of `words` words.
    fn sentence(&self, words: usize, rng: &mut impl Rng) -> String;

    /// A paragraph of `sentences` sentences.
    fn paragraph(&self, sentences: usize, rng: &mut impl Rng) -> String;

    /// Today's date shifted by a day offset drawn uniformly from `days`.
    /// Negative offsets land in the past, positive ones in the future.
    fn date_within(&self, days: RangeInclusive<i64>, rng: &mut impl Rng) -> Date;

    /// Picks one element from a non-empty slice.
    fn pick<'a, T>(&self, items: &'a [T], rng: &mut impl Rng) -> &'a T {
        &items[rng.gen_range(0..items.len())]
    }
}

/// [`FakeProvider`] backed by the `fake` crate's English locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnFaker;

impl FakeProvider for EnFaker {
    fn full_name(&self, rng: &mut impl Rng) -> String {
        Name().fake_with_rng(rng)
    }

    fn email(&self, rng: &mut impl Rng) -> String {
        FreeEmail().fake_with_rng(rng)
    }

    fn password(&self, length: usize, rng: &mut impl Rng) -> String {
        Password(length..length + 1).fake_with_rng(rng)
    }

    fn job_field(&self, rng: &mut impl Rng) -> String {
        Field().fake_with_rng(rng)
    }

    fn sentence(&self, words: usize, rng: &mut impl Rng) -> String {
        Sentence(words..words + 1).fake_with_rng(rng)
    }

    fn paragraph(&self, sentences: usize, rng: &mut impl Rng) -> String {
        Paragraph(sentences..sentences + 1).fake_with_rng(rng)
    }

    fn date_within(&self, days: RangeInclusive<i64>, rng: &mut impl Rng) -> Date {
        let offset = rng.gen_range(days);
        OffsetDateTime::now_utc().date() + Duration::days(offset)
    }
}
