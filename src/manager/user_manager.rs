use std::fmt::Display;

use super::User;

#[derive(Debug)]
pub enum Error {
    NotFound,
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound,
            _ => Error::DatabaseError(err),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound => write!(f, "user not found"),
            Error::DatabaseError(err) => write!(f, "database error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Clone)]
pub struct UserManager<'a> {
    pool: &'a sqlx::PgPool,
}

impl<'a> UserManager<'a> {
    pub fn new(pool: &'a sqlx::PgPool) -> Self {
        Self { pool }
    }
}

impl UserManager<'_> {
    pub async fn get_all_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(self.pool)
            .await
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<User, Error> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(self.pool)
            .await?)
    }
}
