//! Integration tests for the Account repository using in-memory SurrealDB.

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use turnstile_core::error::TurnstileError;
use turnstile_core::models::account::CreateAccount;
use turnstile_core::repository::AccountRepository;
use turnstile_db::repository::SurrealAccountRepository;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    turnstile_db::run_migrations(&db).await.unwrap();
    db
}

fn alice() -> CreateAccount {
    CreateAccount {
        email: "alice@example.com".into(),
        full_name: "Alice Example".into(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$placeholder".into(),
    }
}

#[tokio::test]
async fn create_and_get_account() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo.create(alice()).await.unwrap();
    assert_eq!(account.email, "alice@example.com");
    assert_eq!(account.full_name, "Alice Example");

    let fetched = repo.get_by_email("alice@example.com").await.unwrap();
    assert_eq!(fetched.id, account.id);
    assert_eq!(fetched.full_name, "Alice Example");
    assert_eq!(fetched.password_hash, account.password_hash);
    assert_eq!(fetched.created_at, account.created_at);
}

#[tokio::test]
async fn get_unknown_email_is_not_found() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let err = repo.get_by_email("nobody@example.com").await.unwrap_err();
    assert!(
        matches!(err, TurnstileError::NotFound { .. }),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn duplicate_email_is_rejected_by_index() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    repo.create(alice()).await.unwrap();

    // Same email, different display name and hash: the unique index on
    // email must reject the second record.
    let err = repo
        .create(CreateAccount {
            email: "alice@example.com".into(),
            full_name: "Another Alice".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$b3RoZXJzYWx0$other".into(),
        })
        .await
        .unwrap_err();

    assert!(
        matches!(err, TurnstileError::AlreadyExists { .. }),
        "expected AlreadyExists, got: {err:?}"
    );

    // The original record is untouched.
    let fetched = repo.get_by_email("alice@example.com").await.unwrap();
    assert_eq!(fetched.full_name, "Alice Example");
}

#[tokio::test]
async fn emails_are_distinct_identities() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    repo.create(alice()).await.unwrap();
    let bob = repo
        .create(CreateAccount {
            email: "bob@example.com".into(),
            full_name: "Bob Example".into(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$Ym9ic3NhbHQ$bob".into(),
        })
        .await
        .unwrap();

    let fetched = repo.get_by_email("bob@example.com").await.unwrap();
    assert_eq!(fetched.id, bob.id);
    assert_ne!(
        repo.get_by_email("alice@example.com").await.unwrap().id,
        bob.id
    );
}
