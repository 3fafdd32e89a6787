/**
 * Publication Model
 *
 * A user-authored content item with a like counter. The author id is set
 * server-side from the authenticated caller and never trusted from the
 * request body; the author nick is denormalized, joined at query time,
 * and read-only.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ApiError;

/// A publication made by a user
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub titulo: String,
    pub conteudo: String,
    #[serde(rename = "autorId")]
    pub autor_id: i64,
    /// Joined from `usuarios` on reads; empty on freshly created records
    #[serde(rename = "autorNick", skip_serializing_if = "String::is_empty")]
    #[sqlx(default)]
    pub autor_nick: String,
    pub curtidas: i64,
    #[serde(rename = "criadaEm", skip_serializing_if = "Option::is_none")]
    #[sqlx(default)]
    pub criada_em: Option<DateTime<Utc>>,
}

impl Post {
    /// Validate and format the record. Validation runs on the raw fields
    /// and precedes trimming.
    pub fn prepare(&mut self) -> Result<(), ApiError> {
        self.validate()?;
        self.format();
        Ok(())
    }

    fn validate(&self) -> Result<(), ApiError> {
        if self.titulo.is_empty() {
            return Err(ApiError::blank_field("titulo"));
        }
        if self.conteudo.is_empty() {
            return Err(ApiError::blank_field("conteudo"));
        }
        Ok(())
    }

    fn format(&mut self) {
        self.titulo = self.titulo.trim().to_string();
        self.conteudo = self.conteudo.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(titulo: &str, conteudo: &str) -> Post {
        Post {
            id: 0,
            titulo: titulo.to_string(),
            conteudo: conteudo.to_string(),
            autor_id: 1,
            autor_nick: String::new(),
            curtidas: 0,
            criada_em: None,
        }
    }

    #[test]
    fn test_empty_title_fails() {
        assert!(post("", "x").prepare().is_err());
    }

    #[test]
    fn test_empty_content_fails() {
        assert!(post("x", "").prepare().is_err());
    }

    #[test]
    fn test_prepare_trims_fields() {
        let mut p = post(" a ", " b ");
        p.prepare().unwrap();
        assert_eq!(p.titulo, "a");
        assert_eq!(p.conteudo, "b");
    }

    #[test]
    fn test_author_nick_hidden_when_empty() {
        let json = serde_json::to_value(post("a", "b")).unwrap();
        assert!(json.get("autorNick").is_none());
        assert!(json.get("criadaEm").is_none());
    }
}
