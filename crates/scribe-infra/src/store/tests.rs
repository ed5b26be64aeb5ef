#[cfg(test)]
mod tests {
    use crate::store::PostgresBlogStore;
    use crate::store::entity::{blog, post};
    use scribe_core::ports::BlogStore;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_load_rehydrates_blog() {
        let owner = Uuid::new_v4();
        let author = Uuid::new_v4();

        // Mock the two load queries: blog row, then its posts in id order
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![blog::Model {
                name: "Blogger".to_owned(),
                owner,
                next_id: 3,
            }]])
            .append_query_results(vec![vec![
                post::Model {
                    blog_name: "Blogger".to_owned(),
                    id: 1,
                    title: "My first post".to_owned(),
                    content: "Hello world!".to_owned(),
                    author,
                    published: true,
                    published_at: 1_700_000_000,
                },
                post::Model {
                    blog_name: "Blogger".to_owned(),
                    id: 2,
                    title: "My second post".to_owned(),
                    content: "Hello Lisbon!".to_owned(),
                    author,
                    published: false,
                    published_at: 0,
                },
            ]])
            .into_connection();

        let store = PostgresBlogStore::new(db, "Blogger");

        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded.name(), "Blogger");
        assert_eq!(loaded.owner(), owner);
        assert_eq!(loaded.next_id(), 3);
        assert_eq!(loaded.posts().len(), 2);

        let first = loaded.post_by_id(1).unwrap();
        assert_eq!(first.title, "My first post");
        assert!(first.published);
        assert_eq!(first.published_at, 1_700_000_000);

        let second = loaded.post_by_id(2).unwrap();
        assert!(!second.published);
        assert_eq!(second.published_at, 0);
    }

    #[tokio::test]
    async fn test_load_missing_blog() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new()])
            .into_connection();

        let store = PostgresBlogStore::new(db, "Blogger");

        assert!(store.load().await.unwrap().is_none());
    }
}
