//! Shared fixtures: an in-memory SQLite database behind the real routes.

#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test;
use sea_orm::{ConnectOptions, Database};

use blogly_core::domain::{NewPost, NewTag, NewUser};
use blogly_server::AppState;
use migration::{Migrator, MigratorTrait};

/// Build the app around `state` with the production route table.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(blogly_server::handlers::configure_routes),
        )
        .await
    };
}

/// Fresh state over a migrated in-memory database.
pub async fn test_state() -> AppState {
    // In-memory SQLite is per connection, so the pool holds exactly one.
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let db = Database::connect(opts).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    AppState::new(db)
}

pub async fn seed_user(state: &AppState, first: &str, last: &str) -> i32 {
    state
        .users
        .create(NewUser::new(first.into(), last.into(), ""))
        .await
        .unwrap()
        .id
}

pub async fn seed_tag(state: &AppState, name: &str) -> i32 {
    state.tags.create(NewTag::new(name.into())).await.unwrap().id
}

pub async fn seed_post(state: &AppState, user_id: i32, title: &str, tag_ids: &[i32]) -> i32 {
    state
        .posts
        .create(NewPost::new(user_id, title.into(), "content".into()), tag_ids)
        .await
        .unwrap()
        .id
}

pub async fn body_text<B>(resp: ServiceResponse<B>) -> String
where
    B: actix_web::body::MessageBody,
{
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect location")
        .to_str()
        .unwrap()
        .to_string()
}
