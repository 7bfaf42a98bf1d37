use crate::database::PageStore;
use crate::domain::PageLookup;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageStore for SqliteRepository {
    async fn all_pages(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM pages ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list pages")?;

        Ok(names)
    }

    async fn get_page(&self, name: &str) -> Result<PageLookup> {
        let row = sqlx::query_as::<_, (i64, String)>("SELECT id, content FROM pages WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch page {}", name))?;

        // at most one row per name, the name column is unique
        match row {
            Some((id, content)) => Ok(PageLookup {
                found: true,
                id,
                raw_content: content,
            }),
            None => Ok(PageLookup::missing()),
        }
    }

    async fn create_page(&self, name: &str, content: &str) -> Result<i64> {
        if name.trim().is_empty() {
            bail!("Page name must not be empty");
        }

        // no existence pre-check: create vs. update is the caller's call, and
        // the unique index turns a duplicate insert into a storage error
        let result = sqlx::query("INSERT INTO pages (name, content) VALUES (?, ?)")
            .bind(name)
            .bind(content)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to create page {}", name))?;

        Ok(result.last_insert_rowid())
    }

    async fn save_page(&self, id: i64, content: &str) -> Result<()> {
        // affects zero rows when the id is gone, which is not an error
        sqlx::query("UPDATE pages SET content = ? WHERE id = ?")
            .bind(content)
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to save page {}", id))?;

        Ok(())
    }

    async fn delete_page(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM pages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete page {}", id))?;

        Ok(())
    }
}
