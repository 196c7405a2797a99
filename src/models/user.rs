use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbUser {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub avatar_url: String,
    pub cover_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields a caller supplies when creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub handle: String,
    pub avatar_url: String,
    pub cover_url: String,
}

/// `stats` and `favorites` are resolved per field, see [`crate::resolvers::UserResolver`].
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct User {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub cover_url: String,
    pub avatar_url: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, SimpleObject)]
pub struct UserStats {
    pub following_count: i32,
    pub follower_count: i32,
    pub tweet_count: i32,
}
