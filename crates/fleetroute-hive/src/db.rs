use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

const MAX_RETRIES: u32 = 5;

pub async fn init_db(db_url: &str) -> anyhow::Result<SqlitePool> {
    info!("🔌 Connecting to SQLite at {}...", db_url);

    let pool = connect_with_retry(db_url).await?;

    let schema = include_str!("../schema.sql");
    apply_schema(&pool, schema)
        .await
        .context("Database schema migration failed")?;

    info!("✅ Database connected and schema applied.");
    Ok(pool)
}

async fn connect_with_retry(db_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)
        .with_context(|| format!("Invalid database URL: {}", db_url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = db_url.contains(":memory:") || db_url.contains("mode=memory");

    let delay = Duration::from_millis(500);
    let mut last_err = None;

    for i in 1..=MAX_RETRIES {
        match pool_options(in_memory)
            .connect_with(options.clone())
            .await
        {
            Ok(p) => return Ok(p),
            Err(e) => {
                warn!(
                    "⚠️  DB Connection attempt {}/{} failed: {}. Retrying...",
                    i, MAX_RETRIES, e
                );
                last_err = Some(e);
                sleep(delay).await;
            }
        }
    }

    match last_err {
        Some(e) => Err(anyhow::Error::new(e).context(format!(
            "Could not open {} after {} attempts",
            db_url, MAX_RETRIES
        ))),
        None => anyhow::bail!("Could not open {}", db_url),
    }
}

// Every connection to an in-memory database sees its own empty database,
// so that pool holds exactly one connection and never recycles it.
fn pool_options(in_memory: bool) -> SqlitePoolOptions {
    if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    }
}

async fn apply_schema(pool: &SqlitePool, schema: &str) -> Result<(), sqlx::Error> {
    let statements = split_sql(schema);

    let mut tx = pool.begin().await?;

    for (i, sql) in statements.iter().enumerate() {
        if let Err(e) = sqlx::query(sql).execute(&mut *tx).await {
            tracing::error!("🚨 Schema Error in statement #{}:\n{}", i + 1, sql);
            return Err(e);
        }
    }

    tx.commit().await?;
    Ok(())
}

/// Splits a schema file into statements on trailing semicolons.
/// Comment-only chunks are dropped. Does not understand `;` inside strings.
fn split_sql(raw: &str) -> Vec<String> {
    let mut cmds = Vec::new();
    let mut current = String::new();

    for line in raw.lines() {
        let code = match line.find("--") {
            Some(idx) => &line[..idx],
            None => line,
        };
        let code = code.trim();

        if code.is_empty() {
            continue;
        }

        current.push_str(code);
        current.push('\n');

        if code.ends_with(';') {
            cmds.push(current.trim().to_string());
            current = String::new();
        }
    }

    if !current.trim().is_empty() {
        cmds.push(current.trim().to_string());
    }
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sql_strips_comments() {
        let raw = "-- header\nCREATE TABLE a (x INT); -- trailing\n\nCREATE TABLE b (\n  y INT\n);\n";
        let cmds = split_sql(raw);
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0], "CREATE TABLE a (x INT);");
        assert!(cmds[1].starts_with("CREATE TABLE b"));
        assert!(!cmds.iter().any(|c| c.contains("--")));
    }

    #[test]
    fn split_sql_keeps_unterminated_tail() {
        let cmds = split_sql("SELECT 1;\nSELECT 2");
        assert_eq!(cmds, vec!["SELECT 1;", "SELECT 2"]);
    }

    #[test]
    fn bundled_schema_splits_cleanly() {
        let cmds = split_sql(include_str!("../schema.sql"));
        assert_eq!(cmds.len(), 4);
        assert!(cmds.iter().all(|c| c.ends_with(';')));
    }

    #[tokio::test]
    async fn memory_db_applies_schema() {
        let pool = init_db("sqlite::memory:").await.unwrap();
        let row: (i64,) = sqlx::query_as(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name IN ('routes', 'route_waypoints')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(row.0, 2);
    }
}
