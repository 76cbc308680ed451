//! Entity generators for seed data.
//!
//! One generator per table, producing rows whose foreign keys are drawn from
//! the id pools returned by the preceding phases:
//! - [`UserGenerator`]: accounts with variant-specific role vocabularies
//! - [`CourseGenerator`]: courses named after professional fields
//! - [`ProposalGenerator`]: proposals submitted by existing users
//! - [`ProjectGenerator`]: projects tied to a course and a proposal
//! - [`FeedbackGenerator`]: feedback on existing projects
//! - [`ProjectStudentGenerator`]: unique project-student enrollments
//! - [`NotificationGenerator`]: notifications addressed to existing users

pub mod course;
pub mod feedback;
pub mod notification;
pub mod project;
pub mod proposal;
pub mod user;

pub use course::{CourseGenerator, GeneratedCourse};
pub use feedback::{FeedbackGenerator, GeneratedFeedback};
pub use notification::{GeneratedNotification, NotificationGenerator};
pub use project::{
    GeneratedProject, GeneratedProjectStudent, ProjectGenerator, ProjectStudentGenerator,
};
pub use proposal::{GeneratedProposal, ProposalGenerator};
pub use user::{GeneratedUser, UserGenConfig, UserGenerator};
