/// Inline SQL migrations for the Speedpack stats schema.
///
/// We use simple inline migrations rather than sqlx migration files
/// because the schema is small and self-contained.

pub const MIGRATIONS: &[&str] = &[
    // Migration 1: performance_stats table
    r#"
CREATE TABLE IF NOT EXISTS performance_stats (
    category           TEXT PRIMARY KEY,
    successful_uploads INTEGER NOT NULL DEFAULT 0 CHECK (successful_uploads >= 0),
    failed_uploads     INTEGER NOT NULL DEFAULT 0 CHECK (failed_uploads >= 0)
);
"#,
];
