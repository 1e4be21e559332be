//! Tag handlers.

use actix_web::{HttpResponse, web};

use blogly_core::DomainError;
use blogly_core::domain::{NewTag, Tag};
use blogly_shared::TagForm;

use super::{html, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

async fn find_tag(state: &AppState, tag_id: i32) -> AppResult<Tag> {
    state
        .tags
        .find_by_id(tag_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Tag", tag_id).into())
}

/// GET /tag/list
pub async fn list_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.tags.list().await?;
    Ok(html(views::tag_list(&tags)))
}

/// GET /create/tag
pub async fn new_tag_form() -> HttpResponse {
    html(views::new_tag())
}

/// POST /tag/list
pub async fn create_tag(
    state: web::Data<AppState>,
    form: web::Form<TagForm>,
) -> AppResult<HttpResponse> {
    let tag = state
        .tags
        .create(NewTag::new(form.into_inner().name))
        .await?;

    tracing::info!(tag_id = tag.id, "Tag created");
    Ok(redirect("/tag/list"))
}

/// GET /tag/{tag_id}
pub async fn edit_tag_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let tag = find_tag(&state, path.into_inner()).await?;
    let posts = state.tags.posts_for(tag.id).await?;

    Ok(html(views::edit_tag(&tag, &posts)))
}

/// POST /tag/{tag_id}
pub async fn update_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<TagForm>,
) -> AppResult<HttpResponse> {
    let mut tag = find_tag(&state, path.into_inner()).await?;
    tag.name = form.into_inner().name;

    let tag = state.tags.update(tag).await?;

    tracing::info!(tag_id = tag.id, "Tag renamed");
    Ok(redirect("/tag/list"))
}

/// POST /tag/{tag_id}/delete
///
/// Posts keep everything but this tag.
pub async fn delete_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let tag = find_tag(&state, path.into_inner()).await?;
    state.tags.delete(tag.id).await?;

    tracing::info!(tag_id = tag.id, "Tag deleted");
    Ok(redirect("/tag/list"))
}
