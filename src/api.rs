use std::sync::Arc;

use poem::web::Json as PlainJson;
use poem::error::ResponseError;
use poem::{handler, Response};
use poem_openapi::error::{ContentTypeError, ParseRequestPayloadError};
use poem_openapi::{payload::Json, OpenApi};
use serde::Serialize;

use crate::error::Error;
use crate::models::{Post, Project, Skill, Snippet, SnippetCreate};
use crate::queries;
use crate::store::Store;

pub struct AppState {
    pub store: Store,
}

pub struct Api {
    state: Arc<AppState>,
}

impl Api {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl Api {
    /// All projects
    #[oai(path = "/projects", method = "get")]
    async fn list_projects(&self) -> poem::Result<Json<Vec<Project>>> {
        let session = self.state.store.session().await?;
        let rows = queries::all_projects(session.conn()).await?;
        session.finish().await?;
        Ok(Json(rows.into_iter().map(Project::from).collect()))
    }

    /// Published snippets, newest first
    #[oai(path = "/snippets", method = "get")]
    async fn list_snippets(&self) -> poem::Result<Json<Vec<Snippet>>> {
        let session = self.state.store.session().await?;
        let rows = queries::published_snippets(session.conn()).await?;
        session.finish().await?;
        Ok(Json(rows.into_iter().map(Snippet::from).collect()))
    }

    /// Create a snippet
    #[oai(path = "/snippets", method = "post")]
    async fn create_snippet(&self, Json(input): Json<SnippetCreate>) -> poem::Result<Json<Snippet>> {
        let new = input.into_new()?;
        let session = self.state.store.session().await?;
        let created = queries::insert_snippet(session.conn(), new).await?;
        session.finish().await?;
        tracing::info!(id = created.id, published = created.is_published, "snippet created");
        Ok(Json(created.into()))
    }

    /// Skills in display order
    #[oai(path = "/skills", method = "get")]
    async fn list_skills(&self) -> poem::Result<Json<Vec<Skill>>> {
        let session = self.state.store.session().await?;
        let rows = queries::skills_in_display_order(session.conn()).await?;
        session.finish().await?;
        Ok(Json(rows.into_iter().map(Skill::from).collect()))
    }

    /// Published posts
    #[oai(path = "/posts", method = "get")]
    async fn list_posts(&self) -> poem::Result<Json<Vec<Post>>> {
        let session = self.state.store.session().await?;
        let rows = queries::published_posts(session.conn()).await?;
        session.finish().await?;
        Ok(Json(rows.into_iter().map(Post::from).collect()))
    }
}

#[derive(Serialize)]
pub struct Status {
    pub message: &'static str,
}

/// Liveness check
#[handler]
pub fn index() -> PlainJson<Status> {
    PlainJson(Status {
        message: "portfolio api is up",
    })
}

/// Renders body-parsing failures the same way as other validation errors.
pub async fn payload_error(err: ParseRequestPayloadError) -> Response {
    Error::Validation(err.reason).as_response()
}

/// Missing or wrong `Content-Type` on a JSON body.
pub async fn content_type_error(err: ContentTypeError) -> Response {
    Error::Validation(err.to_string()).as_response()
}
