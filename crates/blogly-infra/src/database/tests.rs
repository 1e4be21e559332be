use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use sea_orm::{
    ConnectOptions, Database, DatabaseBackend, DbConn, DbErr, MockDatabase, MockExecResult,
};

use blogly_core::domain::{NewPost, NewTag, NewUser, Post, Tag, User};
use blogly_core::error::RepoError;
use blogly_core::ports::{BaseRepository, PostRepository, TagRepository, UserRepository};
use migration::{Migrator, MigratorTrait};

use super::entity::post;
use super::sql_base::map_db_err;
use super::sql_repo::{SqlPostRepository, SqlTagRepository, SqlUserRepository};

/// Fresh in-memory SQLite database with the production schema applied.
async fn sqlite() -> DbConn {
    // One connection: every in-memory connection is its own database.
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// The repositories as the server sees them, behind their ports.
struct Repos {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    tags: Arc<dyn TagRepository>,
}

async fn repos() -> Repos {
    let db = sqlite().await;
    Repos {
        users: Arc::new(SqlUserRepository::new(db.clone())),
        posts: Arc::new(SqlPostRepository::new(db.clone())),
        tags: Arc::new(SqlTagRepository::new(db)),
    }
}

impl Repos {
    async fn seed_user(&self, first: &str, last: &str) -> i32 {
        self.users
            .create(NewUser::new(first.into(), last.into(), ""))
            .await
            .unwrap()
            .id
    }

    async fn seed_tags(&self, names: &[&str]) -> Vec<i32> {
        let mut ids = Vec::new();
        for name in names {
            let tag = self.tags.create(NewTag::new(name.to_string())).await.unwrap();
            ids.push(tag.id);
        }
        ids
    }
}

fn tag_ids(tags: &[Tag]) -> Vec<i32> {
    tags.iter().map(|t| t.id).collect()
}

#[tokio::test]
async fn test_find_post_by_id() {
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: 7,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            created_at: now.into(),
            user_id: 3,
        }]])
        .into_connection();

    let repo = SqlPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(7).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 7);
    assert_eq!(post.user_id, 3);
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SqlTagRepository::new(db);

    let result = BaseRepository::<Tag, i32>::delete(&repo, 99).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[test]
fn test_record_not_updated_maps_to_not_found() {
    assert!(matches!(
        map_db_err(DbErr::RecordNotUpdated),
        RepoError::NotFound
    ));
    assert!(matches!(
        map_db_err(DbErr::Custom("boom".into())),
        RepoError::Query(_)
    ));
}

#[tokio::test]
async fn test_user_round_trip_and_listing_order() {
    let repos = repos().await;

    let created = repos
        .users
        .create(NewUser::new(
            "Grace".into(),
            "Hopper".into(),
            "https://example.com/grace.png",
        ))
        .await
        .unwrap();
    repos.seed_user("Ada", "Lovelace").await;
    repos.seed_user("Alan", "Hopper").await;

    let found = repos.users.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.image_url, "https://example.com/grace.png");

    let names: Vec<String> = repos
        .users
        .list()
        .await
        .unwrap()
        .iter()
        .map(|u| u.full_name())
        .collect();
    assert_eq!(names, vec!["Alan Hopper", "Grace Hopper", "Ada Lovelace"]);
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let repos = repos().await;

    let ghost = User {
        id: 404,
        first_name: "No".into(),
        last_name: "Body".into(),
        image_url: "".into(),
    };

    assert!(matches!(
        repos.users.update(ghost).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_deleting_user_cascades_to_posts() {
    let repos = repos().await;

    let author = repos.seed_user("Joel", "Burton").await;
    let bystander = repos.seed_user("Jane", "Smith").await;
    let tags = repos.seed_tags(&["fun"]).await;

    let first = repos
        .posts
        .create(NewPost::new(author, "One".into(), "1".into()), &tags)
        .await
        .unwrap();
    let second = repos
        .posts
        .create(NewPost::new(author, "Two".into(), "2".into()), &[])
        .await
        .unwrap();
    let kept = repos
        .posts
        .create(NewPost::new(bystander, "Mine".into(), "3".into()), &tags)
        .await
        .unwrap();

    repos.users.delete(author).await.unwrap();

    assert!(repos.posts.find_by_id(first.id).await.unwrap().is_none());
    assert!(repos.posts.find_by_id(second.id).await.unwrap().is_none());
    assert!(repos.posts.find_by_id(kept.id).await.unwrap().is_some());
    assert_eq!(tag_ids(&repos.posts.tags_for(kept.id).await.unwrap()), tags);
}

#[tokio::test]
async fn test_editing_post_replaces_tag_set() {
    let repos = repos().await;

    let author = repos.seed_user("Joel", "Burton").await;
    let ids = repos.seed_tags(&["a-one", "b-two", "c-three"]).await;

    let post = repos
        .posts
        .create(
            NewPost::new(author, "Tagged".into(), "body".into()),
            &[ids[0], ids[2]],
        )
        .await
        .unwrap();
    assert_eq!(
        tag_ids(&repos.posts.tags_for(post.id).await.unwrap()),
        vec![ids[0], ids[2]]
    );

    let mut edited = post.clone();
    edited.title = "Retagged".into();
    let updated = repos
        .posts
        .update_with_tags(edited, &[ids[1]])
        .await
        .unwrap();

    assert_eq!(updated.title, "Retagged");
    assert_eq!(updated.created_at, post.created_at);
    assert_eq!(
        tag_ids(&repos.posts.tags_for(post.id).await.unwrap()),
        vec![ids[1]]
    );
}

#[tokio::test]
async fn test_unknown_tag_ids_are_ignored() {
    let repos = repos().await;

    let author = repos.seed_user("Joel", "Burton").await;
    let ids = repos.seed_tags(&["real"]).await;

    let post = repos
        .posts
        .create(
            NewPost::new(author, "Title".into(), "body".into()),
            &[ids[0], 999, ids[0]],
        )
        .await
        .unwrap();

    assert_eq!(tag_ids(&repos.posts.tags_for(post.id).await.unwrap()), ids);
}

#[tokio::test]
async fn test_deleting_tag_leaves_posts_and_other_tags() {
    let repos = repos().await;

    let author = repos.seed_user("Joel", "Burton").await;
    let ids = repos.seed_tags(&["keep", "drop"]).await;

    let first = repos
        .posts
        .create(NewPost::new(author, "First".into(), "1".into()), &ids)
        .await
        .unwrap();
    let second = repos
        .posts
        .create(NewPost::new(author, "Second".into(), "2".into()), &[ids[1]])
        .await
        .unwrap();
    assert_eq!(repos.tags.posts_for(ids[1]).await.unwrap().len(), 2);

    repos.tags.delete(ids[1]).await.unwrap();

    assert_eq!(
        tag_ids(&repos.posts.tags_for(first.id).await.unwrap()),
        vec![ids[0]]
    );
    assert!(repos.posts.tags_for(second.id).await.unwrap().is_empty());
    assert!(repos.posts.find_by_id(second.id).await.unwrap().is_some());
    assert!(repos.tags.find_by_id(ids[1]).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_tag_name_is_a_constraint_violation() {
    let repos = repos().await;

    repos.tags.create(NewTag::new("rust".into())).await.unwrap();
    let result = repos.tags.create(NewTag::new("rust".into())).await;

    assert!(matches!(result, Err(RepoError::Constraint(_))));
}

#[tokio::test]
async fn test_renaming_tag_onto_existing_name_is_rejected() {
    let repos = repos().await;

    repos.tags.create(NewTag::new("rust".into())).await.unwrap();
    let mut other = repos.tags.create(NewTag::new("go".into())).await.unwrap();
    other.name = "rust".into();

    assert!(matches!(
        repos.tags.update(other).await,
        Err(RepoError::Constraint(_))
    ));
}

#[tokio::test]
async fn test_latest_returns_five_newest_with_authors() {
    let repos = repos().await;

    let author = repos.seed_user("Joel", "Burton").await;
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

    // Inserted out of chronological order so ids and timestamps disagree.
    for minutes in [3, 0, 6, 1, 5, 2, 4] {
        let mut draft = NewPost::new(author, format!("minute {minutes}"), "body".into());
        draft.created_at = base + Duration::minutes(minutes);
        repos.posts.create(draft, &[]).await.unwrap();
    }

    let latest = repos.posts.latest(5).await.unwrap();
    let titles: Vec<&str> = latest.iter().map(|p| p.post.title.as_str()).collect();

    assert_eq!(
        titles,
        vec!["minute 6", "minute 5", "minute 4", "minute 3", "minute 2"]
    );
    assert!(latest.iter().all(|p| p.author.id == author));
}

#[tokio::test]
async fn test_posts_by_user_are_newest_first() {
    let repos = repos().await;

    let author = repos.seed_user("Joel", "Burton").await;
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

    for (hours, title) in [(0, "old"), (1, "new")] {
        let mut draft = NewPost::new(author, title.to_string(), "body".into());
        draft.created_at = base + Duration::hours(hours);
        repos.posts.create(draft, &[]).await.unwrap();
    }

    let titles: Vec<String> = repos
        .posts
        .find_by_user_id(author)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["new", "old"]);
}
