use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(string(Blogs::Name).primary_key())
                    .col(uuid(Blogs::Owner))
                    .col(big_integer(Blogs::NextId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(string(Posts::BlogName))
                    .col(big_integer(Posts::Id))
                    .col(string(Posts::Title))
                    .col(text(Posts::Content))
                    .col(uuid(Posts::Author))
                    .col(boolean(Posts::Published))
                    .col(big_integer(Posts::PublishedAt))
                    .primary_key(Index::create().col(Posts::BlogName).col(Posts::Id))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_blog")
                            .from(Posts::Table, Posts::BlogName)
                            .to(Blogs::Table, Blogs::Name)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Name,
    Owner,
    NextId,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    BlogName,
    Id,
    Title,
    Content,
    Author,
    Published,
    PublishedAt,
}
