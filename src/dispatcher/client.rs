use crate::database::PageStore;
use crate::dispatcher::protocol::{
    Action, AllPagesReply, CreatePageArgs, CreatePageReply, DeletePageArgs, GetPageArgs,
    SavePageArgs,
};
use crate::dispatcher::Dispatcher;
use crate::domain::PageLookup;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// PageStore implementation that forwards every call over the dispatcher to
/// whatever worker serves the configured address. The HTTP handlers only see
/// the trait, so swapping this for a direct repository changes nothing above.
pub struct QueueClient {
    dispatcher: Arc<Dispatcher>,
    address: String,
}

impl QueueClient {
    pub fn new(dispatcher: Arc<Dispatcher>, address: String) -> Self {
        Self {
            dispatcher,
            address,
        }
    }
}

#[async_trait]
impl PageStore for QueueClient {
    async fn all_pages(&self) -> Result<Vec<String>> {
        let reply = self
            .dispatcher
            .request(&self.address, Action::AllPages, serde_json::json!({}))
            .await?;

        let reply: AllPagesReply = serde_json::from_value(reply)?;
        Ok(reply.pages)
    }

    async fn get_page(&self, name: &str) -> Result<PageLookup> {
        let payload = serde_json::to_value(GetPageArgs {
            name: name.to_string(),
        })?;

        let reply = self
            .dispatcher
            .request(&self.address, Action::GetPage, payload)
            .await?;

        Ok(serde_json::from_value(reply)?)
    }

    async fn create_page(&self, name: &str, content: &str) -> Result<i64> {
        let payload = serde_json::to_value(CreatePageArgs {
            name: name.to_string(),
            content: content.to_string(),
        })?;

        let reply = self
            .dispatcher
            .request(&self.address, Action::CreatePage, payload)
            .await?;

        let reply: CreatePageReply = serde_json::from_value(reply)?;
        Ok(reply.id)
    }

    async fn save_page(&self, id: i64, content: &str) -> Result<()> {
        let payload = serde_json::to_value(SavePageArgs {
            id,
            content: content.to_string(),
        })?;

        self.dispatcher
            .request(&self.address, Action::SavePage, payload)
            .await?;

        Ok(())
    }

    async fn delete_page(&self, id: i64) -> Result<()> {
        let payload = serde_json::to_value(DeletePageArgs { id })?;

        self.dispatcher
            .request(&self.address, Action::DeletePage, payload)
            .await?;

        Ok(())
    }
}
