//! One function per store operation the API needs.
//!
//! Everything is generic over `ConnectionTrait` so it runs the same inside a
//! request [`Session`](crate::store::Session) or directly on the pool.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{post, project, skill, snippet};
use crate::error::Result;

/// A validated snippet ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub description: Option<String>,
    pub html_code: Option<String>,
    pub css_code: Option<String>,
    pub js_code: Option<String>,
    pub is_published: bool,
}

pub async fn all_projects<C: ConnectionTrait>(db: &C) -> Result<Vec<project::Model>> {
    Ok(project::Entity::find().all(db).await?)
}

/// Published snippets, newest first.
pub async fn published_snippets<C: ConnectionTrait>(db: &C) -> Result<Vec<snippet::Model>> {
    let rows = snippet::Entity::find()
        .filter(snippet::Column::IsPublished.eq(true))
        .order_by_desc(snippet::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Inserts a snippet; `id` and `created_at` are assigned by the store.
pub async fn insert_snippet<C: ConnectionTrait>(db: &C, new: NewSnippet) -> Result<snippet::Model> {
    let am = snippet::ActiveModel {
        title: Set(new.title),
        description: Set(new.description),
        html_code: Set(new.html_code),
        css_code: Set(new.css_code),
        js_code: Set(new.js_code),
        is_published: Set(new.is_published),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Skills in display order. Ties on `skill_order` fall back to insertion order.
pub async fn skills_in_display_order<C: ConnectionTrait>(db: &C) -> Result<Vec<skill::Model>> {
    let rows = skill::Entity::find()
        .order_by_asc(skill::Column::SkillOrder)
        .order_by_asc(skill::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn published_posts<C: ConnectionTrait>(db: &C) -> Result<Vec<post::Model>> {
    let rows = post::Entity::find()
        .filter(post::Column::IsPublished.eq(true))
        .all(db)
        .await?;
    Ok(rows)
}
