pub mod model;

use crate::parser::markdown::render_markdown;
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use model::{CreateForm, DeleteForm, IndexTemplate, PageTemplate, SaveForm};

pub fn wiki_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/wiki/{page}", get(page_rendering_handler))
        .route("/save", post(page_update_handler))
        .route("/create", post(page_create_handler))
        .route("/delete", post(page_deletion_handler))
}

async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let pages = state.store.all_pages().await.map_err(internal_error)?;

    render(IndexTemplate {
        title: "Wiki home",
        pages,
    })
}

async fn page_rendering_handler(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let lookup = state.store.get_page(&page).await.map_err(internal_error)?;

    // a missing page still renders: the sentinel text is valid Markdown and
    // the view doubles as the edit form for a fresh page
    let template = PageTemplate {
        title: page,
        id: lookup.id,
        new_page: !lookup.found,
        content: render_markdown(&lookup.raw_content),
        raw_content: lookup.raw_content,
        timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    render(template)
}

async fn page_update_handler(
    State(state): State<AppState>,
    Form(form): Form<SaveForm>,
) -> Result<Redirect, StatusCode> {
    // trust the client-supplied newPage flag, exactly "yes" selects create;
    // no server-side re-check of storage state
    if form.new_page == "yes" {
        state
            .store
            .create_page(&form.title, &form.markdown)
            .await
            .map_err(internal_error)?;
    } else {
        state
            .store
            .save_page(form.id, &form.markdown)
            .await
            .map_err(internal_error)?;
    }

    Ok(Redirect::to(&format!("/wiki/{}", form.title)))
}

// never touches storage: only decides where to send the browser so the view
// handler's not-found path can present the edit form
async fn page_create_handler(Form(form): Form<CreateForm>) -> Redirect {
    if form.name.trim().is_empty() {
        Redirect::to("/")
    } else {
        Redirect::to(&format!("/wiki/{}", form.name))
    }
}

async fn page_deletion_handler(
    State(state): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, StatusCode> {
    state
        .store
        .delete_page(form.id)
        .await
        .map_err(internal_error)?;

    Ok(Redirect::to("/"))
}

fn render<T: Template>(template: T) -> Result<Html<String>, StatusCode> {
    template.render().map(Html).map_err(|err| {
        tracing::error!("template rendering failed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn internal_error(err: anyhow::Error) -> StatusCode {
    tracing::error!("wiki request failed: {err:#}");
    StatusCode::INTERNAL_SERVER_ERROR
}
