//! User handlers.

use actix_web::{HttpResponse, web};

use blogly_core::DomainError;
use blogly_core::domain::{NewUser, User};
use blogly_shared::UserForm;

use super::{html, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

/// Fetch a user or fail with NotFound.
pub(super) async fn find_user(state: &AppState, user_id: i32) -> AppResult<User> {
    state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| DomainError::not_found("User", user_id).into())
}

/// GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    Ok(html(views::user_list(&users)))
}

/// GET /create
pub async fn new_user_form() -> HttpResponse {
    html(views::new_user())
}

/// POST /
pub async fn create_user(
    state: web::Data<AppState>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let user = state
        .users
        .create(NewUser::new(
            form.first_name,
            form.last_name,
            &form.image_url,
        ))
        .await?;

    tracing::info!(user_id = user.id, "User created");
    Ok(redirect(format!("/{}", user.id)))
}

/// GET /{user_id}
pub async fn show_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    let posts = state.posts.find_by_user_id(user.id).await?;

    Ok(html(views::user_detail(&user, &posts)))
}

/// GET /{user_id}/edit
pub async fn edit_user_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    Ok(html(views::edit_user(&user)))
}

/// POST /{user_id}/edit
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let mut user = find_user(&state, path.into_inner()).await?;
    let form = form.into_inner();

    user.apply(form.first_name, form.last_name, &form.image_url);
    let user = state.users.update(user).await?;

    tracing::info!(user_id = user.id, "User updated");
    Ok(redirect(format!("/{}", user.id)))
}

/// POST /{user_id}/delete
///
/// The user's posts go with them.
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;
    state.users.delete(user.id).await?;

    tracing::info!(user_id = user.id, "User deleted");
    Ok(redirect("/users"))
}
