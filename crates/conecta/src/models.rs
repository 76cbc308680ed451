//! Categorical vocabularies shared by the schema and the seeder.
//!
//! The database stores these values as plain text (Portuguese, matching the
//! application it backs), so every enum carries its exact column spelling.

/// User profile options matching the strict schema's CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Administrator,
    Supervisor,
    Mediator,
    Student,
    Community,
}

impl UserRole {
    /// Every role, in CHECK-constraint order.
    pub const ALL: [UserRole; 5] = [
        UserRole::Administrator,
        UserRole::Supervisor,
        UserRole::Mediator,
        UserRole::Student,
        UserRole::Community,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Administrator => "Administrador",
            UserRole::Supervisor => "Supervisor",
            UserRole::Mediator => "Mediador",
            UserRole::Student => "Aluno",
            UserRole::Community => "Comunidade",
        }
    }
}

/// Free-text profile values the loose schema was populated with.
pub const LOOSE_ROLES: &[&str] = &["aluno", "professor", "coordenador"];

/// Review states a submitted proposal moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalStatus {
    New,
    InReview,
    Approved,
    Rejected,
}

impl ProposalStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [ProposalStatus; 4] = [
        ProposalStatus::New,
        ProposalStatus::InReview,
        ProposalStatus::Approved,
        ProposalStatus::Rejected,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::New => "Nova",
            ProposalStatus::InReview => "Em análise",
            ProposalStatus::Approved => "Aprovada",
            ProposalStatus::Rejected => "Rejeitada",
        }
    }
}

/// Delivery states of a project derived from an approved proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
    Late,
}

impl ProjectStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Open,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::Late,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Open => "Aberto",
            ProjectStatus::InProgress => "Em andamento",
            ProjectStatus::Completed => "Concluído",
            ProjectStatus::Late => "Em atraso",
        }
    }
}
