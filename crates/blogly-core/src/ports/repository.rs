use async_trait::async_trait;

use crate::domain::{AuthoredPost, NewPost, NewTag, NewUser, Post, Tag, User};
use crate::error::RepoError;

/// Generic repository trait defining the CRUD operations shared by every entity.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Overwrite a stored entity with the given values.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Dependent rows go with it.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    /// All users ordered by last name, then first name.
    async fn list(&self) -> Result<Vec<User>, RepoError>;
}

/// Post repository. Tag assignment lives here since the post owns the join rows.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a post and attach the tags among `tag_ids` that exist.
    async fn create(&self, post: NewPost, tag_ids: &[i32]) -> Result<Post, RepoError>;

    /// Overwrite a post and replace its whole tag set with `tag_ids`.
    async fn update_with_tags(&self, post: Post, tag_ids: &[i32]) -> Result<Post, RepoError>;

    /// A user's posts, newest first.
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    /// The `limit` most recently created posts with their authors.
    async fn latest(&self, limit: u64) -> Result<Vec<AuthoredPost>, RepoError>;

    /// Tags attached to a post, ordered by name.
    async fn tags_for(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i32> {
    async fn create(&self, tag: NewTag) -> Result<Tag, RepoError>;

    /// All tags ordered by name.
    async fn list(&self) -> Result<Vec<Tag>, RepoError>;

    /// Posts carrying the tag, newest first.
    async fn posts_for(&self, tag_id: i32) -> Result<Vec<Post>, RepoError>;
}
