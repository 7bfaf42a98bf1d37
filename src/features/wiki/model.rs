use askama::Template;
use serde::Deserialize;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub pages: Vec<String>,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub title: String,
    pub id: i64,
    pub new_page: bool,
    pub raw_content: String,
    pub content: String,
    pub timestamp: String,
}

// Form bodies, field names match what the page templates post back.

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    pub id: i64,
    pub title: String,
    pub markdown: String,
    #[serde(rename = "newPage", default)]
    pub new_page: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub id: i64,
}
