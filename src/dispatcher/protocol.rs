use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// Action tag selecting which storage operation a dispatched request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    #[display("all-pages")]
    AllPages,
    #[display("get-page")]
    GetPage,
    #[display("save-page")]
    SavePage,
    #[display("create-page")]
    CreatePage,
    #[display("delete-page")]
    DeletePage,
}

// Wire shapes for the envelope payloads. The get-page reply reuses
// domain::PageLookup directly.

#[derive(Debug, Serialize, Deserialize)]
pub struct GetPageArgs {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePageArgs {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePageReply {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavePageArgs {
    pub id: i64,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletePageArgs {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AllPagesReply {
    pub pages: Vec<String>,
}
