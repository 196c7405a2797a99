use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Tweet, User};

/// Join record for the "liked" relation between a user and a tweet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbFavorite {
    pub id: String,
    pub user_id: String,
    pub tweet_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A favorite with both foreign keys dropped and its relations not yet attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteBase {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Favorite {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub user: User,
    pub tweet: Tweet,
}

impl Favorite {
    pub fn compose(base: FavoriteBase, user: User, tweet: Tweet) -> Self {
        Favorite {
            id: base.id,
            created_at: base.created_at,
            updated_at: base.updated_at,
            user,
            tweet,
        }
    }
}
