/**
 * User Repository
 *
 * Database operations for user accounts, credentials and the follower
 * edge table. All statements use parameter binding; the password column
 * is only ever selected by the credential lookups.
 */

use sqlx::PgPool;

use crate::models::User;

/// Minimal projection for the login flow: id plus stored password hash.
#[derive(Debug, sqlx::FromRow)]
pub struct Credentials {
    pub id: i64,
    pub senha: String,
}

/// Repository for the `usuarios` and `seguidores` tables
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the generated id.
    pub async fn create(&self, user: &User) -> Result<i64, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO usuarios (nome, nick, email, senha)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&user.nome)
        .bind(&user.nick)
        .bind(&user.email)
        .bind(&user.senha)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// List users whose name or nick contains the given term.
    pub async fn search(&self, name_or_nick: &str) -> Result<Vec<User>, sqlx::Error> {
        let pattern = format!("%{}%", name_or_nick);

        sqlx::query_as::<_, User>(
            r#"
            SELECT id, nome, nick, email, criado_em
            FROM usuarios
            WHERE nome ILIKE $1 OR nick ILIKE $1
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
    }

    /// Fetch a single user by id, or `None` when no row matches.
    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, nome, nick, email, criado_em
            FROM usuarios
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Overwrite a user's mutable fields (name, nick, email).
    pub async fn update(&self, user_id: i64, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE usuarios SET nome = $1, nick = $2, email = $3
            WHERE id = $4
            "#,
        )
        .bind(&user.nome)
        .bind(&user.nick)
        .bind(&user.email)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a user.
    pub async fn delete(&self, user_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Look up login credentials by email. Only id and password hash are
    /// selected.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Credentials>, sqlx::Error> {
        sqlx::query_as::<_, Credentials>(
            r#"
            SELECT id, senha FROM usuarios WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// Fetch the stored password hash for a user, for the change-password
    /// flow.
    pub async fn find_password_hash(&self, user_id: i64) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT senha FROM usuarios WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Replace a user's password hash.
    pub async fn update_password(&self, user_id: i64, hash: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE usuarios SET senha = $1 WHERE id = $2")
            .bind(hash)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Record that `follower_id` follows `user_id`. Idempotent: duplicate
    /// pairs are silently ignored.
    pub async fn follow(&self, user_id: i64, follower_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO seguidores (usuario_id, seguidor_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(follower_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a follow edge.
    pub async fn unfollow(&self, user_id: i64, follower_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            DELETE FROM seguidores WHERE usuario_id = $1 AND seguidor_id = $2
            "#,
        )
        .bind(user_id)
        .bind(follower_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List the users following `user_id`.
    pub async fn followers(&self, user_id: i64) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.nome, u.nick, u.email, u.criado_em
            FROM usuarios u
            INNER JOIN seguidores s ON u.id = s.seguidor_id
            WHERE s.usuario_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// List the users that `user_id` follows.
    pub async fn following(&self, user_id: i64) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.nome, u.nick, u.email, u.criado_em
            FROM usuarios u
            INNER JOIN seguidores s ON u.id = s.usuario_id
            WHERE s.seguidor_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
