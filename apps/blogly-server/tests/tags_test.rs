#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;

use common::{body_text, location, seed_post, seed_tag, seed_user, test_state};

#[actix_web::test]
async fn test_created_tag_is_listed() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/create/tag").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/tag/list")
        .set_form([("name", "rust")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/tag/list");

    let req = test::TestRequest::get().uri("/tag/list").to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains(">rust</a>"));
}

#[actix_web::test]
async fn test_duplicate_tag_name_is_rejected() {
    let state = test_state().await;
    seed_tag(&state, "rust").await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/tag/list")
        .set_form([("name", "rust")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(state.tags.list().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_rename_tag() {
    let state = test_state().await;
    let user = seed_user(&state, "Joel", "Burton").await;
    let tag = seed_tag(&state, "rsut").await;
    seed_post(&state, user, "Typo post", &[tag]).await;
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/tag/{tag}"))
        .to_request();
    let body = body_text(test::call_service(&app, req).await).await;
    assert!(body.contains(r#"value="rsut""#));
    assert!(body.contains(">Typo post</a>"));

    let req = test::TestRequest::post()
        .uri(&format!("/tag/{tag}"))
        .set_form([("name", "rust")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let stored = state.tags.find_by_id(tag).await.unwrap().unwrap();
    assert_eq!(stored.name, "rust");
}

#[actix_web::test]
async fn test_deleting_tag_untags_posts_but_keeps_them() {
    let state = test_state().await;
    let user = seed_user(&state, "Joel", "Burton").await;
    let doomed = seed_tag(&state, "doomed").await;
    let survivor = seed_tag(&state, "survivor").await;
    let both = seed_post(&state, user, "Both", &[doomed, survivor]).await;
    let only = seed_post(&state, user, "Only doomed", &[doomed]).await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/tag/{doomed}/delete"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/tag/list");

    let remaining: Vec<i32> = state
        .posts
        .tags_for(both)
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(remaining, vec![survivor]);
    assert!(state.posts.tags_for(only).await.unwrap().is_empty());

    for post in [both, only] {
        let req = test::TestRequest::get()
            .uri(&format!("/{user}/{post}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/tag/{doomed}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_unknown_tag_mutations_are_not_found() {
    let state = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/tag/77")
        .set_form([("name", "ghost")])
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::post().uri("/tag/77/delete").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}
