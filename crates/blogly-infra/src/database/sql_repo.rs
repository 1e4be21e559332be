//! SQL repository implementations backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use blogly_core::domain::{AuthoredPost, NewPost, NewTag, NewUser, Post, Tag, User};
use blogly_core::error::RepoError;
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sql_base::{SqlBaseRepository, map_db_err};

/// SQL user repository.
pub type SqlUserRepository = SqlBaseRepository<UserEntity>;

/// SQL post repository.
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

/// SQL tag repository.
pub type SqlTagRepository = SqlBaseRepository<TagEntity>;

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::LastName)
            .order_by_asc(user::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// Link `post_id` to every tag in `tag_ids` that exists. Unknown ids are skipped.
async fn attach_tags<C>(conn: &C, post_id: i32, tag_ids: &[i32]) -> Result<(), RepoError>
where
    C: ConnectionTrait,
{
    if tag_ids.is_empty() {
        return Ok(());
    }

    let tags = TagEntity::find()
        .filter(tag::Column::Id.is_in(tag_ids.iter().copied()))
        .all(conn)
        .await
        .map_err(map_db_err)?;

    if tags.is_empty() {
        return Ok(());
    }

    tracing::debug!(post_id, tag_count = tags.len(), "Attaching tags");

    let links = tags.into_iter().map(|t| post_tag::ActiveModel {
        post_id: Set(post_id),
        tag_id: Set(t.id),
    });

    PostTagEntity::insert_many(links)
        .exec_without_returning(conn)
        .await
        .map_err(map_db_err)?;

    Ok(())
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn create(&self, post: NewPost, tag_ids: &[i32]) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = post::ActiveModel::from(post)
            .insert(&txn)
            .await
            .map_err(map_db_err)?;
        attach_tags(&txn, model.id, tag_ids).await?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, user_id = model.user_id, "Created post");
        Ok(model.into())
    }

    async fn update_with_tags(&self, post: Post, tag_ids: &[i32]) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = post::ActiveModel::from(post)
            .update(&txn)
            .await
            .map_err(map_db_err)?;

        PostTagEntity::delete_many()
            .filter(post_tag::Column::PostId.eq(model.id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        attach_tags(&txn, model.id, tag_ids).await?;

        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Updated post and replaced tags");
        Ok(model.into())
    }

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn latest(&self, limit: u64) -> Result<Vec<AuthoredPost>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        // Every post has an author; the foreign key guarantees the join hits.
        Ok(rows
            .into_iter()
            .filter_map(|(post, author)| {
                author.map(|author| AuthoredPost {
                    post: post.into(),
                    author: author.into(),
                })
            })
            .collect())
    }

    async fn tags_for(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .inner_join(PostTagEntity)
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl TagRepository for SqlTagRepository {
    async fn create(&self, tag: NewTag) -> Result<Tag, RepoError> {
        let model = tag::ActiveModel::from(tag)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(tag_id = model.id, tag_name = %model.name, "Created tag");
        Ok(model.into())
    }

    async fn list(&self) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn posts_for(&self, tag_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .inner_join(PostTagEntity)
            .filter(post_tag::Column::TagId.eq(tag_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
