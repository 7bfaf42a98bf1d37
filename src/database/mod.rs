use crate::domain::PageLookup;
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// The five storage operations behind the wiki. Satisfied both by the direct
// SQLite repository and by the queue client that forwards each call over the
// dispatcher, so the HTTP tier never depends on which transport is wired in.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// All page names, lexicographically sorted.
    async fn all_pages(&self) -> Result<Vec<String>>;

    /// Look a page up by name. Missing pages resolve to `PageLookup::missing()`.
    async fn get_page(&self, name: &str) -> Result<PageLookup>;

    // write operations
    async fn create_page(&self, name: &str, content: &str) -> Result<i64>;
    async fn save_page(&self, id: i64, content: &str) -> Result<()>;
    async fn delete_page(&self, id: i64) -> Result<()>;
}
