//! Table definitions for the Conecta database.
//!
//! Two schema variants exist in the wild: an early development one with
//! unconstrained TEXT columns and binary attachments, and the reviewed one
//! with sized columns, a profile CHECK, an active flag, and a feedback
//! backlink on Projeto. They drifted apart and were never merged, so both are
//! kept here verbatim and selected per run; mixing them in one database is
//! not supported.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::Error;

/// Early development schema.
pub const LOOSE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS Usuario (
  id_usuario SERIAL PRIMARY KEY,
  nome TEXT NOT NULL,
  email TEXT UNIQUE NOT NULL,
  senha TEXT NOT NULL,
  perfil TEXT
);

CREATE TABLE IF NOT EXISTS Notificacao (
  id_notificacao SERIAL PRIMARY KEY,
  mensagem TEXT NOT NULL,
  dataNotif DATE NOT NULL,
  id_usuario INTEGER NOT NULL REFERENCES Usuario(id_usuario) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS Proposta (
  id_proposta SERIAL PRIMARY KEY,
  titulo TEXT NOT NULL,
  descricao TEXT,
  data_submissao DATE NOT NULL,
  status TEXT,
  anexos BYTEA,
  id_usuario INTEGER NOT NULL REFERENCES Usuario(id_usuario) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS Curso (
  id_curso SERIAL PRIMARY KEY,
  nome TEXT NOT NULL,
  descricao TEXT
);

CREATE TABLE IF NOT EXISTS Projeto (
  id_projeto SERIAL PRIMARY KEY,
  titulo TEXT NOT NULL,
  descricao TEXT,
  prazo DATE,
  status TEXT,
  feedback TEXT,
  fk_curso_id_curso INTEGER NOT NULL REFERENCES Curso(id_curso) ON DELETE CASCADE,
  fk_proposta_id_proposta INTEGER NOT NULL REFERENCES Proposta(id_proposta) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS Feedback (
  id_feedback SERIAL PRIMARY KEY,
  comentario TEXT,
  anexos BYTEA,
  data DATE NOT NULL,
  fk_usuario_id_usuario INTEGER NOT NULL REFERENCES Usuario(id_usuario) ON DELETE CASCADE,
  id_projeto INTEGER NOT NULL REFERENCES Projeto(id_projeto) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS Projeto_Aluno (
  idprojetoaluno SERIAL PRIMARY KEY,
  fk_projeto_id_projeto INTEGER NOT NULL REFERENCES Projeto(id_projeto) ON DELETE CASCADE,
  id_usuario INTEGER NOT NULL REFERENCES Usuario(id_usuario) ON DELETE CASCADE
);
"#;

/// Reviewed schema. The Projeto -> Feedback backlink is added after Feedback
/// exists because the two tables reference each other.
pub const STRICT_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS Usuario (
  id_usuario SERIAL PRIMARY KEY,
  nome VARCHAR(50) NOT NULL,
  email VARCHAR(100) UNIQUE NOT NULL,
  senha VARCHAR(30) NOT NULL,
  ativo BOOLEAN NOT NULL DEFAULT TRUE,
  perfil VARCHAR(15) NOT NULL
    CHECK (perfil IN ('Administrador', 'Supervisor', 'Mediador', 'Aluno', 'Comunidade'))
);

CREATE TABLE IF NOT EXISTS Notificacao (
  id_notificacao SERIAL PRIMARY KEY,
  mensagem TEXT NOT NULL,
  dataNotif DATE NOT NULL DEFAULT CURRENT_DATE,
  id_usuario INTEGER NOT NULL REFERENCES Usuario(id_usuario) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS Proposta (
  id_proposta SERIAL PRIMARY KEY,
  titulo VARCHAR(100) NOT NULL,
  descricao TEXT NOT NULL,
  data_submissao DATE NOT NULL DEFAULT CURRENT_DATE,
  status VARCHAR(50) NOT NULL,
  anexos TEXT,
  id_usuario INTEGER NOT NULL REFERENCES Usuario(id_usuario) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS Curso (
  id_curso SERIAL PRIMARY KEY,
  nome VARCHAR(60) NOT NULL,
  descricao TEXT
);

CREATE TABLE IF NOT EXISTS Projeto (
  id_projeto SERIAL PRIMARY KEY,
  titulo VARCHAR(100) NOT NULL,
  descricao TEXT NOT NULL,
  prazo DATE,
  status VARCHAR(50) NOT NULL,
  anexos TEXT,
  fk_curso_id_curso INTEGER NOT NULL REFERENCES Curso(id_curso) ON DELETE CASCADE,
  fk_proposta_id_proposta INTEGER NOT NULL REFERENCES Proposta(id_proposta) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS Feedback (
  id_feedback SERIAL PRIMARY KEY,
  comentario TEXT,
  anexos TEXT,
  data DATE NOT NULL DEFAULT CURRENT_DATE,
  fk_usuario_id_usuario INTEGER NOT NULL REFERENCES Usuario(id_usuario) ON DELETE CASCADE,
  id_projeto INTEGER NOT NULL REFERENCES Projeto(id_projeto) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS Projeto_Aluno (
  id_projeto_aluno SERIAL PRIMARY KEY,
  fk_projeto_id_projeto INTEGER NOT NULL REFERENCES Projeto(id_projeto) ON DELETE CASCADE,
  id_usuario INTEGER NOT NULL REFERENCES Usuario(id_usuario) ON DELETE CASCADE
);

ALTER TABLE Projeto ADD COLUMN IF NOT EXISTS id_feedback INTEGER REFERENCES Feedback(id_feedback) ON DELETE SET NULL;
"#;

/// Selects which of the two divergent schemas a run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// TEXT columns, nullable profile, BYTEA attachments.
    Loose,
    /// Sized VARCHARs, profile CHECK, active flag, Projeto.id_feedback.
    #[default]
    Strict,
}

impl SchemaVariant {
    /// The full DDL for this variant.
    pub fn ddl(&self) -> &'static str {
        match self {
            SchemaVariant::Loose => LOOSE_SCHEMA,
            SchemaVariant::Strict => STRICT_SCHEMA,
        }
    }

    /// Returns the configuration string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Loose => "loose",
            SchemaVariant::Strict => "strict",
        }
    }

    /// Primary-key column of the Projeto_Aluno link table, which the two
    /// variants spell differently.
    pub fn project_student_pk(&self) -> &'static str {
        match self {
            SchemaVariant::Loose => "idprojetoaluno",
            SchemaVariant::Strict => "id_projeto_aluno",
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "loose" => Ok(SchemaVariant::Loose),
            "strict" => Ok(SchemaVariant::Strict),
            other => Err(format!("unknown schema variant: {other:?}")),
        }
    }
}

/// Applies the variant's DDL in a single transaction.
///
/// Every statement uses an `IF NOT EXISTS` form, so rerunning against an
/// already-provisioned database validates the tables and changes nothing.
pub async fn create_all(pool: &PgPool, variant: SchemaVariant) -> Result<(), Error> {
    let mut tx = pool.begin().await?;
    sqlx::raw_sql(variant.ddl()).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("loose".parse::<SchemaVariant>(), Ok(SchemaVariant::Loose));
        assert_eq!("STRICT".parse::<SchemaVariant>(), Ok(SchemaVariant::Strict));
        assert!("sloppy".parse::<SchemaVariant>().is_err());
    }

    #[test]
    fn test_default_is_strict() {
        assert_eq!(SchemaVariant::default(), SchemaVariant::Strict);
    }

    #[test]
    fn test_ddl_covers_every_table() {
        for variant in [SchemaVariant::Loose, SchemaVariant::Strict] {
            for table in [
                "Usuario",
                "Notificacao",
                "Proposta",
                "Curso",
                "Projeto",
                "Feedback",
                "Projeto_Aluno",
            ] {
                let clause = format!("CREATE TABLE IF NOT EXISTS {table} (");
                assert!(
                    variant.ddl().contains(&clause),
                    "{variant} schema is missing {table}"
                );
            }
        }
    }

    #[test]
    fn test_ddl_is_rerunnable() {
        // Plain CREATE TABLE or ADD COLUMN would abort a second run.
        for variant in [SchemaVariant::Loose, SchemaVariant::Strict] {
            assert!(!variant.ddl().contains("CREATE TABLE Usuario"));
        }
        assert!(STRICT_SCHEMA.contains("ADD COLUMN IF NOT EXISTS id_feedback"));
    }

    #[test]
    fn test_variant_differences() {
        assert!(LOOSE_SCHEMA.contains("anexos BYTEA"));
        assert!(!STRICT_SCHEMA.contains("BYTEA"));
        assert!(STRICT_SCHEMA.contains("ativo BOOLEAN NOT NULL DEFAULT TRUE"));
        assert!(!LOOSE_SCHEMA.contains("ativo"));
        assert_eq!(SchemaVariant::Loose.project_student_pk(), "idprojetoaluno");
        assert_eq!(
            SchemaVariant::Strict.project_student_pk(),
            "id_projeto_aluno"
        );
    }
}
