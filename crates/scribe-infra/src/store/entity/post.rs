//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub blog_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: Uuid,
    pub published: bool,
    pub published_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog::Entity",
        from = "Column::BlogName",
        to = "super::blog::Column::Name",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Blog,
}

impl Related<super::blog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Post.
impl From<Model> for scribe_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id as u64,
            title: model.title,
            content: model.content,
            author: model.author,
            published: model.published,
            published_at: model.published_at,
        }
    }
}

/// Build the ActiveModel for a domain post belonging to `blog_name`.
pub fn active_model(blog_name: &str, post: &scribe_core::domain::Post) -> ActiveModel {
    ActiveModel {
        blog_name: Set(blog_name.to_string()),
        id: Set(post.id as i64),
        title: Set(post.title.clone()),
        content: Set(post.content.clone()),
        author: Set(post.author),
        published: Set(post.published),
        published_at: Set(post.published_at),
    }
}
