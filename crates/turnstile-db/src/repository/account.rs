//! SurrealDB implementation of [`AccountRepository`].
//!
//! The `idx_account_email` UNIQUE index is the authority for identity
//! uniqueness: a duplicate-key failure from `CREATE` is mapped to
//! [`DbError::Duplicate`] so concurrent registrations of the same email
//! cannot both succeed.

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use turnstile_core::error::TurnstileResult;
use turnstile_core::models::account::{Account, CreateAccount};
use turnstile_core::repository::AccountRepository;
use uuid::Uuid;

use crate::error::DbError;
use crate::schema::ACCOUNT_EMAIL_INDEX;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct AccountRow {
    email: String,
    full_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct AccountRowWithId {
    record_id: String,
    email: String,
    full_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl AccountRowWithId {
    fn try_into_account(self) -> Result<Account, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Query(format!("invalid UUID: {e}")))?;
        Ok(Account {
            id,
            email: self.email,
            full_name: self.full_name,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

/// Map a failed `CREATE` to `Duplicate` when the unique email index
/// rejected the record, otherwise to a plain query error.
fn map_create_error(message: String) -> DbError {
    if message.contains(ACCOUNT_EMAIL_INDEX) {
        DbError::Duplicate {
            entity: "account".into(),
        }
    } else {
        DbError::Query(message)
    }
}

/// SurrealDB implementation of the Account repository.
#[derive(Clone)]
pub struct SurrealAccountRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealAccountRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> AccountRepository for SurrealAccountRepository<C> {
    async fn create(&self, input: CreateAccount) -> TurnstileResult<Account> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('account', $id) SET \
                 email = $email, full_name = $full_name, \
                 password_hash = $password_hash",
            )
            .bind(("id", id_str.clone()))
            .bind(("email", input.email))
            .bind(("full_name", input.full_name))
            .bind(("password_hash", input.password_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| map_create_error(e.to_string()))?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id_str,
        })?;

        Ok(Account {
            id,
            email: row.email,
            full_name: row.full_name,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }

    async fn get_by_email(&self, email: &str) -> TurnstileResult<Account> {
        let email_owned = email.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * \
                 FROM account WHERE email = $email",
            )
            .bind(("email", email_owned))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: format!("email={email}"),
        })?;

        Ok(row.try_into_account()?)
    }
}
