// crates/speedpack-db/src/queries.rs
// Counter operations for the performance_stats table.

use crate::{Database, DbError, DbResult};

/// One row of the performance_stats table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub successful_uploads: i64,
    pub failed_uploads: i64,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for CategoryStats {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;
        Ok(Self {
            category: row.try_get("category")?,
            successful_uploads: row.try_get("successful_uploads")?,
            failed_uploads: row.try_get("failed_uploads")?,
        })
    }
}

impl Database {
    /// Record one upload outcome for `category`.
    ///
    /// Single-statement conditional upsert: the row is created on first
    /// reference with `{1,0}` or `{0,1}`, otherwise exactly the matching
    /// counter is incremented. The increment happens inside the statement —
    /// concurrent calls for the same category must all land, never a
    /// read-then-write.
    pub async fn record_upload_outcome(&self, category: &str, succeeded: bool) -> DbResult<()> {
        if category.trim().is_empty() {
            return Err(DbError::EmptyCategory);
        }

        let sql = if succeeded {
            r#"
            INSERT INTO performance_stats (category, successful_uploads, failed_uploads)
            VALUES (?1, 1, 0)
            ON CONFLICT(category) DO UPDATE SET
                successful_uploads = successful_uploads + 1
            "#
        } else {
            r#"
            INSERT INTO performance_stats (category, successful_uploads, failed_uploads)
            VALUES (?1, 0, 1)
            ON CONFLICT(category) DO UPDATE SET
                failed_uploads = failed_uploads + 1
            "#
        };

        sqlx::query(sql).bind(category).execute(self.pool()).await?;
        Ok(())
    }

    /// Overwrite both counters for `category`.
    ///
    /// Last-writer-wins: creates the row if absent, otherwise replaces both
    /// values unconditionally — no merge with prior counters.
    pub async fn set_category_stats(
        &self,
        category: &str,
        successful_uploads: i64,
        failed_uploads: i64,
    ) -> DbResult<()> {
        if category.trim().is_empty() {
            return Err(DbError::EmptyCategory);
        }

        sqlx::query(
            r#"
            INSERT INTO performance_stats (category, successful_uploads, failed_uploads)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(category) DO UPDATE SET
                successful_uploads = excluded.successful_uploads,
                failed_uploads = excluded.failed_uploads
            "#,
        )
        .bind(category)
        .bind(successful_uploads)
        .bind(failed_uploads)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// All counter rows, ordered by category for stable output.
    pub async fn list_category_stats(&self) -> DbResult<Vec<CategoryStats>> {
        let rows = sqlx::query_as::<_, CategoryStats>(
            "SELECT category, successful_uploads, failed_uploads
             FROM performance_stats ORDER BY category",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }
}
