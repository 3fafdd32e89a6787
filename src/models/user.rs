/**
 * User Model
 *
 * Represents a registered user. The `senha` field holds the plaintext
 * password only between body decoding and `prepare`, which replaces it
 * with a bcrypt hash; it is never serialized on reads.
 *
 * # Lifecycle Stages
 *
 * `prepare` behaves differently per stage:
 * - `Registration`: all fields must be non-empty, password is hashed.
 * - `Update`: emptiness checks and hashing are skipped (updates may omit
 *   the password entirely).
 *
 * Email format is validated on both stages, on the field as received
 * (before trimming), and yields an error distinct from the blank-field
 * one.
 */

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::auth::hash_password;
use crate::error::ApiError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Which lifecycle step a user record is being prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Registration,
    Update,
}

/// A user of the social network
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub nome: String,
    pub nick: String,
    pub email: String,
    /// Bcrypt hash at rest; never serialized
    #[serde(skip_serializing)]
    #[sqlx(default)]
    pub senha: String,
    /// Server-set; absent on records that have not been persisted yet
    #[serde(rename = "criadoEm", skip_serializing_if = "Option::is_none")]
    #[sqlx(default)]
    pub criado_em: Option<DateTime<Utc>>,
}

impl User {
    /// Validate and format the record for the given lifecycle stage.
    ///
    /// Validation short-circuits on the first failing field. On
    /// `Registration` the plaintext password is replaced with its hash.
    pub fn prepare(&mut self, stage: Stage) -> Result<(), ApiError> {
        self.validate(stage)?;
        self.format(stage)
    }

    fn validate(&self, stage: Stage) -> Result<(), ApiError> {
        if stage == Stage::Registration {
            if self.nome.is_empty() {
                return Err(ApiError::blank_field("nome"));
            }
            if self.nick.is_empty() {
                return Err(ApiError::blank_field("nick"));
            }
            if self.email.is_empty() {
                return Err(ApiError::blank_field("email"));
            }
        }

        if !email_regex().is_match(&self.email) {
            return Err(ApiError::Validation("o email inserido é inválido".to_string()));
        }

        if stage == Stage::Registration && self.senha.is_empty() {
            return Err(ApiError::blank_field("senha"));
        }

        Ok(())
    }

    fn format(&mut self, stage: Stage) -> Result<(), ApiError> {
        self.nome = self.nome.trim().to_string();
        self.nick = self.nick.trim().to_string();
        self.email = self.email.trim().to_string();

        if stage == Stage::Registration {
            self.senha = hash_password(&self.senha)?;
        }

        Ok(())
    }
}
