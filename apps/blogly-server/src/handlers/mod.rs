//! HTTP handlers and route configuration.

mod home;
mod posts;
mod tags;
mod users;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, form_error_handler, path_error_handler};

/// Largest urlencoded body accepted. Post content has no length cap of its own.
pub const FORM_LIMIT: usize = 2 * 1024 * 1024;

/// Configure all application routes.
///
/// Id segments only match digits, so literal segments such as `users` or
/// `edit` never reach an id route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(
            web::FormConfig::default()
                .limit(FORM_LIMIT)
                .error_handler(form_error_handler),
        )
        // Homepage and users
        .service(
            web::resource("/")
                .route(web::get().to(home::homepage))
                .route(web::post().to(users::create_user)),
        )
        .route("/users", web::get().to(users::list_users))
        .route("/create", web::get().to(users::new_user_form))
        // Tags
        .route("/create/tag", web::get().to(tags::new_tag_form))
        .service(
            web::resource("/tag/list")
                .route(web::get().to(tags::list_tags))
                .route(web::post().to(tags::create_tag)),
        )
        .service(
            web::resource(r"/tag/{tag_id:\d+}")
                .route(web::get().to(tags::edit_tag_form))
                .route(web::post().to(tags::update_tag)),
        )
        .route(r"/tag/{tag_id:\d+}/delete", web::post().to(tags::delete_tag))
        // A single user
        .service(
            web::resource(r"/{user_id:\d+}")
                .route(web::get().to(users::show_user))
                .route(web::post().to(posts::create_post)),
        )
        .service(
            web::resource(r"/{user_id:\d+}/edit")
                .route(web::get().to(users::edit_user_form))
                .route(web::post().to(users::update_user)),
        )
        .route(r"/{user_id:\d+}/delete", web::post().to(users::delete_user))
        // Posts
        .route(r"/{user_id:\d+}/posts", web::get().to(posts::new_post_form))
        .route(
            r"/{user_id:\d+}/{post_id:\d+}",
            web::get().to(posts::show_post),
        )
        .service(
            web::resource(r"/{user_id:\d+}/{post_id:\d+}/edit")
                .route(web::get().to(posts::edit_post_form))
                .route(web::post().to(posts::update_post)),
        )
        .route(
            r"/{user_id:\d+}/{post_id:\d+}/delete",
            web::post().to(posts::delete_post),
        )
        .default_service(web::to(not_found));
}

/// Fallback for every unmapped path.
async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("No such route".to_string()))
}

fn html(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}

/// Post/redirect/get: send the browser on with a `303 See Other`.
fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}
