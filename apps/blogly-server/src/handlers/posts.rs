//! Post handlers. Every route is scoped to the post's author.

use actix_web::{HttpResponse, web};

use blogly_core::DomainError;
use blogly_core::domain::{NewPost, Post, User};
use blogly_shared::PostForm;

use super::users::find_user;
use super::{html, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

/// Raw form pairs; `tags[]` repeats so it cannot go through a struct.
type PostFormPairs = web::Form<Vec<(String, String)>>;

/// Fetch a post owned by `user_id`. A post under another user is a miss.
async fn find_post(state: &AppState, user_id: i32, post_id: i32) -> AppResult<(User, Post)> {
    let user = find_user(state, user_id).await?;
    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .filter(|p| p.user_id == user.id)
        .ok_or(DomainError::not_found("Post", post_id))?;

    Ok((user, post))
}

/// GET /{user_id}/posts
pub async fn new_post_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    let tags = state.tags.list().await?;

    Ok(html(views::new_post(&user, &tags)))
}

/// POST /{user_id}
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: PostFormPairs,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    let form = PostForm::from_pairs(form.into_inner())?;

    let post = state
        .posts
        .create(
            NewPost::new(user.id, form.title, form.content),
            &form.tag_ids,
        )
        .await?;

    tracing::info!(user_id = user.id, post_id = post.id, "Post created");
    Ok(redirect(format!("/{}", user.id)))
}

/// GET /{user_id}/{post_id}
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<(i32, i32)>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let (user, post) = find_post(&state, user_id, post_id).await?;
    let tags = state.posts.tags_for(post.id).await?;

    Ok(html(views::post_detail(&user, &post, &tags)))
}

/// GET /{user_id}/{post_id}/edit
pub async fn edit_post_form(
    state: web::Data<AppState>,
    path: web::Path<(i32, i32)>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let (user, post) = find_post(&state, user_id, post_id).await?;

    let all_tags = state.tags.list().await?;
    let selected: Vec<i32> = state
        .posts
        .tags_for(post.id)
        .await?
        .iter()
        .map(|t| t.id)
        .collect();

    Ok(html(views::edit_post(&user, &post, &all_tags, &selected)))
}

/// POST /{user_id}/{post_id}/edit
///
/// The submitted tag selection replaces the post's tags outright.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<(i32, i32)>,
    form: PostFormPairs,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let (user, mut post) = find_post(&state, user_id, post_id).await?;
    let form = PostForm::from_pairs(form.into_inner())?;

    post.title = form.title;
    post.content = form.content;
    let post = state.posts.update_with_tags(post, &form.tag_ids).await?;

    tracing::info!(post_id = post.id, tag_count = form.tag_ids.len(), "Post updated");
    Ok(redirect(format!("/{}/{}", user.id, post.id)))
}

/// POST /{user_id}/{post_id}/delete
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<(i32, i32)>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let (user, post) = find_post(&state, user_id, post_id).await?;

    state.posts.delete(post.id).await?;

    tracing::info!(user_id = user.id, post_id = post.id, "Post deleted");
    Ok(redirect(format!("/{}", user.id)))
}
