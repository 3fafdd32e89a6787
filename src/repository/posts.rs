/**
 * Publication Repository
 *
 * Database operations for publications, the feed query and the like
 * counters.
 *
 * # Counter Atomicity
 *
 * Like/unlike are single UPDATE statements; concurrent requests racing on
 * the same counter rely entirely on the database's statement atomicity,
 * not on application-level locking. The decrement is CASE-guarded so the
 * counter never goes below zero.
 */

use sqlx::PgPool;

use crate::models::Post;

/// Repository for the `publicacoes` table
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a publication and return the generated id.
    pub async fn create(&self, post: &Post) -> Result<i64, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO publicacoes (titulo, conteudo, autor_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&post.titulo)
        .bind(&post.conteudo)
        .bind(post.autor_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Fetch a single publication with its author's nick, or `None`.
    pub async fn find_by_id(&self, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT p.id, p.titulo, p.conteudo, p.autor_id, p.curtidas, p.criada_em,
                   u.nick AS autor_nick
            FROM publicacoes p
            INNER JOIN usuarios u ON u.id = p.autor_id
            WHERE p.id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// The caller's feed: publications authored by the caller or by anyone
    /// the caller follows, deduplicated, newest first.
    pub async fn feed(&self, user_id: i64) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT DISTINCT p.id, p.titulo, p.conteudo, p.autor_id, p.curtidas,
                   p.criada_em, u.nick AS autor_nick
            FROM publicacoes p
            INNER JOIN usuarios u ON u.id = p.autor_id
            LEFT JOIN seguidores s ON p.autor_id = s.usuario_id
            WHERE p.autor_id = $1 OR s.seguidor_id = $1
            ORDER BY p.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// All publications authored by one user.
    pub async fn by_author(&self, user_id: i64) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT p.id, p.titulo, p.conteudo, p.autor_id, p.curtidas, p.criada_em,
                   u.nick AS autor_nick
            FROM publicacoes p
            INNER JOIN usuarios u ON u.id = p.autor_id
            WHERE p.autor_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Overwrite a publication's title and content.
    pub async fn update(&self, post_id: i64, post: &Post) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE publicacoes SET titulo = $1, conteudo = $2 WHERE id = $3
            "#,
        )
        .bind(&post.titulo)
        .bind(&post.conteudo)
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a publication.
    pub async fn delete(&self, post_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM publicacoes WHERE id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Atomically increment a publication's like counter.
    pub async fn like(&self, post_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE publicacoes SET curtidas = curtidas + 1 WHERE id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Atomically decrement a publication's like counter, clamped at zero.
    pub async fn unlike(&self, post_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE publicacoes
            SET curtidas = CASE WHEN curtidas > 0 THEN curtidas - 1 ELSE curtidas END
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
