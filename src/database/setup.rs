use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Drop and recreate every table.
pub fn reset_database(conn: &DbConn) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
        .context("Failed to apply database schema")?;

    log::info!("Database schema reset successfully");
    Ok(())
}
