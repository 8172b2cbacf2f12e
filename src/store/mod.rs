use crate::domain::Page;
use anyhow::Result;
use async_trait::async_trait;

pub mod local;

// a store can be shared between request tasks (referencable)
// generic page persistence operations, filesystem implementation in "local.rs"
#[async_trait]
pub trait PageStore: Send + Sync {
    // Ok(None) means no file exists for this title
    async fn load(&self, title: &str) -> Result<Option<Page>>;

    // write operation: create or fully replace the page file
    async fn save(&self, title: &str, body: &[u8]) -> Result<()>;
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, title: &str, bytes: &[u8]) -> Result<()>;
}
