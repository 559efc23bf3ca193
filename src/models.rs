//! Request and response bodies.
//!
//! These are the JSON shapes the API exposes; they are converted from the
//! entities at the handler boundary so table changes don't leak onto the wire.

use poem_openapi::types::MaybeUndefined;
use poem_openapi::Object;
use sea_orm::prelude::DateTime;
use validator::Validate;

use crate::entities::{post, project, skill, snippet};
use crate::error::Result;
use crate::queries::NewSnippet;

#[derive(Debug, Object)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
}

impl From<project::Model> for Project {
    fn from(m: project::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            tech_stack: m.tech_stack,
        }
    }
}

#[derive(Debug, Object)]
pub struct Snippet {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub html_code: Option<String>,
    pub css_code: Option<String>,
    pub js_code: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime,
}

impl From<snippet::Model> for Snippet {
    fn from(m: snippet::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            html_code: m.html_code,
            css_code: m.css_code,
            js_code: m.js_code,
            is_published: m.is_published,
            created_at: m.created_at,
        }
    }
}

/// Body of `POST /api/snippets`.
///
/// Absent text fields default to `""`; an explicit `null` is stored as null.
#[derive(Debug, Object, Validate)]
pub struct SnippetCreate {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    pub description: MaybeUndefined<String>,
    pub html_code: MaybeUndefined<String>,
    pub css_code: MaybeUndefined<String>,
    pub js_code: MaybeUndefined<String>,
    #[oai(default = "published")]
    pub is_published: bool,
}

fn text_or_empty(field: MaybeUndefined<String>) -> Option<String> {
    match field {
        MaybeUndefined::Undefined => Some(String::new()),
        MaybeUndefined::Null => None,
        MaybeUndefined::Value(text) => Some(text),
    }
}

fn published() -> bool {
    true
}

impl SnippetCreate {
    /// Checks field constraints the JSON shape alone can't express.
    pub fn into_new(self) -> Result<NewSnippet> {
        self.validate()?;
        Ok(NewSnippet {
            title: self.title,
            description: text_or_empty(self.description),
            html_code: text_or_empty(self.html_code),
            css_code: text_or_empty(self.css_code),
            js_code: text_or_empty(self.js_code),
            is_published: self.is_published,
        })
    }
}

#[derive(Debug, Object)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub cover_image: Option<String>,
}

impl From<post::Model> for Post {
    fn from(m: post::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            content: m.content,
            cover_image: m.cover_image,
        }
    }
}

/// Radar-chart entry; ordering fields stay server-side.
#[derive(Debug, Object)]
pub struct Skill {
    pub category: String,
    pub score: i32,
}

impl From<skill::Model> for Skill {
    fn from(m: skill::Model) -> Self {
        Self {
            category: m.category,
            score: m.score,
        }
    }
}
