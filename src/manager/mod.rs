use std::fmt::Display;

use sqlx::types::chrono::NaiveDateTime;

pub mod friend_manager;
pub mod user_manager;

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub birth_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A friendship row as stored: both sides are user ids.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct FriendDto {
    pub id: i32,
    pub initiator_user_id: i32,
    pub second_user_id: i32,
    pub status: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A friendship with both users resolved. Built in memory only, never
/// written back.
#[derive(Debug, Clone)]
pub struct Friend {
    pub id: i32,
    pub initiator_user: User,
    pub second_user: User,
    pub status: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Display-time reading of the raw `status` column. The database does not
/// constrain the column; every value outside {1, 2} reads as `Friends`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendStatus {
    Pending,
    Rejected,
    Friends,
}

impl From<i32> for FriendStatus {
    fn from(raw: i32) -> Self {
        match raw {
            1 => FriendStatus::Pending,
            2 => FriendStatus::Rejected,
            _ => FriendStatus::Friends,
        }
    }
}

impl Display for FriendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FriendStatus::Pending => write!(f, "pending"),
            FriendStatus::Rejected => write!(f, "rejected"),
            FriendStatus::Friends => write!(f, "friends"),
        }
    }
}
