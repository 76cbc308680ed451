//! Database seeding utilities.

use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use thiserror::Error;
use tracing::info;

use conecta::schema::SchemaVariant;

use crate::generators::{
    GeneratedCourse, GeneratedFeedback, GeneratedNotification, GeneratedProject,
    GeneratedProjectStudent, GeneratedProposal, GeneratedUser,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Database seeder for inserting generated data.
///
/// Each `seed_*` method runs one phase in a single transaction: the batch is
/// inserted with multi-row statements of at most `batch_size` rows, and the
/// database-assigned primary keys are returned so later phases can use them
/// as foreign-key pools. Column lists follow the seeder's [`SchemaVariant`].
pub struct Seeder {
    pool: PgPool,
    variant: SchemaVariant,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder targeting the given schema variant.
    pub fn new(pool: PgPool, variant: SchemaVariant) -> Self {
        Self {
            pool,
            variant,
            batch_size: 100,
        }
    }

    /// Sets the row count per INSERT statement.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Seeds users and returns their generated ids.
    pub async fn seed_users(&self, users: &[GeneratedUser]) -> Result<Vec<i32>, SeedError> {
        if users.is_empty() {
            return Ok(Vec::new());
        }
        info!("Seeding {} users...", users.len());

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(users.len());
        for chunk in users.chunks(self.batch_size) {
            ids.extend(self.insert_user_chunk(&mut tx, chunk).await?);
        }
        tx.commit().await?;

        info!("Seeded {} users", ids.len());
        Ok(ids)
    }

    /// Inserts one chunk of users. The loose schema has no `ativo` column,
    /// so the column list depends on the variant.
    async fn insert_user_chunk(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        users: &[GeneratedUser],
    ) -> Result<Vec<i32>, SeedError> {
        let variant = self.variant;
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(match variant {
            SchemaVariant::Loose => "INSERT INTO Usuario (nome, email, senha, perfil) ",
            SchemaVariant::Strict => "INSERT INTO Usuario (nome, email, senha, ativo, perfil) ",
        });
        qb.push_values(users, |mut row, user| {
            row.push_bind(&user.name)
                .push_bind(&user.email)
                .push_bind(&user.password);
            if variant == SchemaVariant::Strict {
                row.push_bind(user.active);
            }
            row.push_bind(&user.role);
        });
        qb.push(" RETURNING id_usuario");

        Ok(qb.build_query_scalar().fetch_all(&mut **tx).await?)
    }

    /// Seeds courses and returns their generated ids.
    pub async fn seed_courses(&self, courses: &[GeneratedCourse]) -> Result<Vec<i32>, SeedError> {
        if courses.is_empty() {
            return Ok(Vec::new());
        }
        info!("Seeding {} courses...", courses.len());

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(courses.len());
        for chunk in courses.chunks(self.batch_size) {
            ids.extend(self.insert_course_chunk(&mut tx, chunk).await?);
        }
        tx.commit().await?;

        info!("Seeded {} courses", ids.len());
        Ok(ids)
    }

    /// Inserts one chunk of courses.
    async fn insert_course_chunk(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        courses: &[GeneratedCourse],
    ) -> Result<Vec<i32>, SeedError> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO Curso (nome, descricao) ");
        qb.push_values(courses, |mut row, course| {
            row.push_bind(&course.name).push_bind(&course.description);
        });
        qb.push(" RETURNING id_curso");

        Ok(qb.build_query_scalar().fetch_all(&mut **tx).await?)
    }

    /// Seeds proposals and returns their generated ids.
    pub async fn seed_proposals(
        &self,
        proposals: &[GeneratedProposal],
    ) -> Result<Vec<i32>, SeedError> {
        if proposals.is_empty() {
            return Ok(Vec::new());
        }
        info!("Seeding {} proposals...", proposals.len());

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(proposals.len());
        for chunk in proposals.chunks(self.batch_size) {
            ids.extend(self.insert_proposal_chunk(&mut tx, chunk).await?);
        }
        tx.commit().await?;

        info!("Seeded {} proposals", ids.len());
        Ok(ids)
    }

    /// Inserts one chunk of proposals. Attachments are BYTEA in the loose
    /// schema and TEXT in the strict one, so the bind type differs.
    async fn insert_proposal_chunk(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        proposals: &[GeneratedProposal],
    ) -> Result<Vec<i32>, SeedError> {
        let variant = self.variant;
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO Proposta (titulo, descricao, data_submissao, status, anexos, id_usuario) ",
        );
        qb.push_values(proposals, |mut row, proposal| {
            row.push_bind(&proposal.title)
                .push_bind(&proposal.description)
                .push_bind(proposal.submitted_on)
                .push_bind(proposal.status.as_str());
            match variant {
                SchemaVariant::Loose => {
                    row.push_bind(proposal.attachments.as_ref().map(|a| a.as_bytes().to_vec()))
                }
                SchemaVariant::Strict => row.push_bind(&proposal.attachments),
            };
            row.push_bind(proposal.user_id);
        });
        qb.push(" RETURNING id_proposta");

        Ok(qb.build_query_scalar().fetch_all(&mut **tx).await?)
    }

    /// Seeds projects and returns their generated ids.
    pub async fn seed_projects(
        &self,
        projects: &[GeneratedProject],
    ) -> Result<Vec<i32>, SeedError> {
        if projects.is_empty() {
            return Ok(Vec::new());
        }
        info!("Seeding {} projects...", projects.len());

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(projects.len());
        for chunk in projects.chunks(self.batch_size) {
            ids.extend(self.insert_project_chunk(&mut tx, chunk).await?);
        }
        tx.commit().await?;

        info!("Seeded {} projects", ids.len());
        Ok(ids)
    }

    /// Inserts one chunk of projects. The fifth column is the loose schema's
    /// inline feedback note; the strict schema put attachments there instead
    /// and keeps its feedback backlink (`id_feedback`) NULL at seed time.
    async fn insert_project_chunk(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        projects: &[GeneratedProject],
    ) -> Result<Vec<i32>, SeedError> {
        let variant = self.variant;
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(match variant {
            SchemaVariant::Loose => {
                "INSERT INTO Projeto \
                 (titulo, descricao, prazo, status, feedback, fk_curso_id_curso, fk_proposta_id_proposta) "
            }
            SchemaVariant::Strict => {
                "INSERT INTO Projeto \
                 (titulo, descricao, prazo, status, anexos, fk_curso_id_curso, fk_proposta_id_proposta) "
            }
        });
        qb.push_values(projects, |mut row, project| {
            row.push_bind(&project.title)
                .push_bind(&project.description)
                .push_bind(project.deadline)
                .push_bind(project.status.as_str());
            match variant {
                SchemaVariant::Loose => row.push_bind(&project.feedback_note),
                SchemaVariant::Strict => row.push_bind(&project.attachments),
            };
            row.push_bind(project.course_id)
                .push_bind(project.proposal_id);
        });
        qb.push(" RETURNING id_projeto");

        Ok(qb.build_query_scalar().fetch_all(&mut **tx).await?)
    }

    /// Seeds feedback entries and returns their generated ids.
    pub async fn seed_feedback(
        &self,
        feedback: &[GeneratedFeedback],
    ) -> Result<Vec<i32>, SeedError> {
        if feedback.is_empty() {
            return Ok(Vec::new());
        }
        info!("Seeding {} feedback entries...", feedback.len());

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(feedback.len());
        for chunk in feedback.chunks(self.batch_size) {
            ids.extend(self.insert_feedback_chunk(&mut tx, chunk).await?);
        }
        tx.commit().await?;

        info!("Seeded {} feedback entries", ids.len());
        Ok(ids)
    }

    /// Inserts one chunk of feedback entries.
    async fn insert_feedback_chunk(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        feedback: &[GeneratedFeedback],
    ) -> Result<Vec<i32>, SeedError> {
        let variant = self.variant;
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO Feedback (comentario, anexos, data, fk_usuario_id_usuario, id_projeto) ",
        );
        qb.push_values(feedback, |mut row, entry| {
            row.push_bind(&entry.comment);
            match variant {
                SchemaVariant::Loose => {
                    row.push_bind(entry.attachments.as_ref().map(|a| a.as_bytes().to_vec()))
                }
                SchemaVariant::Strict => row.push_bind(&entry.attachments),
            };
            row.push_bind(entry.given_on)
                .push_bind(entry.user_id)
                .push_bind(entry.project_id);
        });
        qb.push(" RETURNING id_feedback");

        Ok(qb.build_query_scalar().fetch_all(&mut **tx).await?)
    }

    /// Seeds project-student links and returns their generated ids.
    pub async fn seed_project_students(
        &self,
        links: &[GeneratedProjectStudent],
    ) -> Result<Vec<i32>, SeedError> {
        if links.is_empty() {
            return Ok(Vec::new());
        }
        info!("Seeding {} project-student links...", links.len());

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(links.len());
        for chunk in links.chunks(self.batch_size) {
            ids.extend(self.insert_project_student_chunk(&mut tx, chunk).await?);
        }
        tx.commit().await?;

        info!("Seeded {} project-student links", ids.len());
        Ok(ids)
    }

    /// Inserts one chunk of links. The two variants spell the link table's
    /// primary key differently.
    async fn insert_project_student_chunk(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        links: &[GeneratedProjectStudent],
    ) -> Result<Vec<i32>, SeedError> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO Projeto_Aluno (fk_projeto_id_projeto, id_usuario) ");
        qb.push_values(links, |mut row, link| {
            row.push_bind(link.project_id).push_bind(link.user_id);
        });
        qb.push(" RETURNING ").push(self.variant.project_student_pk());

        Ok(qb.build_query_scalar().fetch_all(&mut **tx).await?)
    }

    /// Seeds notifications and returns their generated ids.
    pub async fn seed_notifications(
        &self,
        notifications: &[GeneratedNotification],
    ) -> Result<Vec<i32>, SeedError> {
        if notifications.is_empty() {
            return Ok(Vec::new());
        }
        info!("Seeding {} notifications...", notifications.len());

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(notifications.len());
        for chunk in notifications.chunks(self.batch_size) {
            ids.extend(self.insert_notification_chunk(&mut tx, chunk).await?);
        }
        tx.commit().await?;

        info!("Seeded {} notifications", ids.len());
        Ok(ids)
    }

    /// Inserts one chunk of notifications.
    async fn insert_notification_chunk(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        notifications: &[GeneratedNotification],
    ) -> Result<Vec<i32>, SeedError> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO Notificacao (mensagem, dataNotif, id_usuario) ");
        qb.push_values(notifications, |mut row, notification| {
            row.push_bind(&notification.message)
                .push_bind(notification.sent_on)
                .push_bind(notification.user_id);
        });
        qb.push(" RETURNING id_notificacao");

        Ok(qb.build_query_scalar().fetch_all(&mut **tx).await?)
    }

    /// Clears all seeded data.
    ///
    /// **WARNING**: This deletes all rows from every Conecta table. Use with
    /// caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        // Order matters due to foreign key constraints
        sqlx::query("DELETE FROM Notificacao")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM Projeto_Aluno")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM Feedback")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM Projeto")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM Proposta")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM Curso").execute(&self.pool).await?;
        sqlx::query("DELETE FROM Usuario")
            .execute(&self.pool)
            .await?;

        info!("All data cleared");
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
