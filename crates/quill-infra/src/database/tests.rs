use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use quill_core::domain::{AuthorId, PostDraft, PostId};
use quill_core::ports::{AuthorRepository, PostRepository};

use crate::database::entity::{author, post};
use crate::database::postgres_repo::{PostgresAuthorRepository, PostgresPostRepository};

fn author_model(id: &str, username: &str) -> author::Model {
    author::Model {
        author_id: id.to_owned(),
        username: username.to_owned(),
        password_hash: "$argon2id$stub".to_owned(),
        created_at: Utc::now().into(),
    }
}

fn post_model(id: &str, author_id: &str, title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        post_id: id.to_owned(),
        title: title.to_owned(),
        body: "Body".to_owned(),
        author_id: author_id.to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_list_authors() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            author_model("100000111111111", "ada"),
            author_model("100000222222222", "bob"),
        ]])
        .into_connection();

    let repo = PostgresAuthorRepository::new(db);

    let authors = repo.list().await.unwrap();

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].username, "ada");
    assert_eq!(authors[1].id, AuthorId::from("100000222222222"));
}

#[tokio::test]
async fn test_list_authors_empty_is_ok() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<author::Model>::new()])
        .into_connection();

    let repo = PostgresAuthorRepository::new(db);

    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_author_by_username_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<author::Model>::new()])
        .into_connection();

    let repo = PostgresAuthorRepository::new(db);

    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_author_returns_inserted_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![author_model("100000123456789", "ada")]])
        .into_connection();

    let repo = PostgresAuthorRepository::new(db);

    let author = repo.create("ada", "$argon2id$stub").await.unwrap();

    assert_eq!(author.username, "ada");
    assert_eq!(author.id.as_str(), "100000123456789");
}

#[tokio::test]
async fn test_list_posts_by_author() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model("500000222222222", "100000111111111", "Newer"),
            post_model("500000111111111", "100000111111111", "Older"),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo
        .list_by_author(&AuthorId::from("100000111111111"))
        .await
        .unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "Newer");
    assert_eq!(posts[0].id, PostId::from("500000222222222"));
}

#[tokio::test]
async fn test_update_owned_is_a_single_qualified_statement() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(
            "500000123456789",
            "100000111111111",
            "Edited",
        )]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let updated = repo
        .update_owned(
            &AuthorId::from("100000111111111"),
            &PostId::from("500000123456789"),
            PostDraft {
                title: "Edited".to_string(),
                body: "Body".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.unwrap().title, "Edited");

    let log = repo.db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let statement = format!("{:?}", log[0]);
    assert!(statement.contains("UPDATE"));
    assert!(statement.contains("author_id"));
    assert!(statement.contains("post_id"));
}

#[tokio::test]
async fn test_update_owned_no_match() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let updated = repo
        .update_owned(
            &AuthorId::from("100000999999999"),
            &PostId::from("500000123456789"),
            PostDraft::default(),
        )
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[tokio::test]
async fn test_delete_owned_reports_match() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let owner = AuthorId::from("100000111111111");
    let post = PostId::from("500000123456789");

    assert!(repo.delete_owned(&owner, &post).await.unwrap());
    assert!(!repo.delete_owned(&owner, &post).await.unwrap());
}

#[tokio::test]
async fn test_delete_all_owned_counts_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 3,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let deleted = repo
        .delete_all_owned(&AuthorId::from("100000111111111"))
        .await
        .unwrap();

    assert_eq!(deleted, 3);
}
