//! PostgreSQL blog store implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use scribe_core::domain::{Blog, Post};
use scribe_core::error::StoreError;
use scribe_core::ports::BlogStore;

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::post::{self, Entity as PostEntity};

/// Durable [`BlogStore`] backed by PostgreSQL via SeaORM.
///
/// Each store instance is bound to one blog name; several blogs share the
/// same tables, keyed by that name. Every `commit` runs as one transaction
/// so a restart can never observe a post without its counter update.
pub struct PostgresBlogStore {
    db: DbConn,
    blog_name: String,
}

impl PostgresBlogStore {
    pub fn new(db: DbConn, blog_name: impl Into<String>) -> Self {
        Self {
            db,
            blog_name: blog_name.into(),
        }
    }

    fn query_err(e: DbErr) -> StoreError {
        StoreError::Query(e.to_string())
    }
}

#[async_trait]
impl BlogStore for PostgresBlogStore {
    async fn load(&self) -> Result<Option<Blog>, StoreError> {
        let row = BlogEntity::find_by_id(self.blog_name.clone())
            .one(&self.db)
            .await
            .map_err(Self::query_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let posts = PostEntity::find()
            .filter(post::Column::BlogName.eq(&self.blog_name))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(Self::query_err)?;

        let next_id = u64::try_from(row.next_id).map_err(|_| {
            StoreError::Corrupt(format!(
                "blog {} has negative id counter {}",
                row.name, row.next_id
            ))
        })?;

        tracing::info!(
            blog = %row.name,
            posts = posts.len(),
            next_id,
            "Loaded persisted blog"
        );

        Ok(Some(Blog::restore(
            row.name,
            row.owner,
            posts.into_iter().map(Into::into).collect(),
            next_id,
        )))
    }

    async fn init(&self, blog: &Blog) -> Result<(), StoreError> {
        let row = blog::ActiveModel {
            name: Set(blog.name().to_string()),
            owner: Set(blog.owner()),
            next_id: Set(blog.next_id() as i64),
        };

        let insert = BlogEntity::insert(row)
            .on_conflict(
                OnConflict::column(blog::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match insert {
            Ok(_) => Ok(()),
            // Row already present from a previous run; metadata is immutable.
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(Self::query_err(e)),
        }
    }

    async fn commit(&self, post: &Post, next_id: u64) -> Result<(), StoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        PostEntity::insert(post::active_model(&self.blog_name, post))
            .on_conflict(
                OnConflict::columns([post::Column::BlogName, post::Column::Id])
                    .update_columns([
                        post::Column::Title,
                        post::Column::Content,
                        post::Column::Published,
                        post::Column::PublishedAt,
                    ])
                    .to_owned(),
            )
            .exec(&txn)
            .await
            .map_err(Self::query_err)?;

        BlogEntity::update_many()
            .col_expr(blog::Column::NextId, Expr::value(next_id as i64))
            .filter(blog::Column::Name.eq(&self.blog_name))
            .exec(&txn)
            .await
            .map_err(Self::query_err)?;

        txn.commit().await.map_err(Self::query_err)?;

        Ok(())
    }
}
