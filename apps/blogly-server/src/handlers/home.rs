//! Homepage.

use actix_web::{HttpResponse, web};

use super::html;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

/// How many posts the homepage shows.
pub const HOMEPAGE_POST_LIMIT: u64 = 5;

/// GET /
pub async fn homepage(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let latest = state.posts.latest(HOMEPAGE_POST_LIMIT).await?;
    Ok(html(views::home(&latest)))
}
