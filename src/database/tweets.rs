use chrono::Utc;
use tracing::info;

use super::{generate_id, Db};
use crate::errors::{Error, Result};
use crate::models::DbTweet;
use crate::schema::Kind;

impl Db {
    pub async fn get_tweet_by_id(&self, id: &str) -> Option<DbTweet> {
        self.read().await.tweets.iter().find(|t| t.id == id).cloned()
    }

    pub async fn get_user_tweets(&self, user_id: &str) -> Vec<DbTweet> {
        self.read()
            .await
            .tweets
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Timeline order: newest `createdAt` first. Tweets sharing a timestamp
    /// come out most recently inserted first.
    pub async fn get_all_tweets(&self) -> Vec<DbTweet> {
        let mut tweets: Vec<DbTweet> = self.read().await.tweets.iter().rev().cloned().collect();
        tweets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tweets
    }

    /// Fails with `NotFound` when `user_id` does not name a stored user.
    pub async fn create_tweet(&self, user_id: &str, message: &str) -> Result<DbTweet> {
        let tweet = self
            .commit(|data| {
                if !data.users.iter().any(|u| u.id == user_id) {
                    return Err(Error::not_found(Kind::User, user_id));
                }
                let now = Utc::now();
                let tweet = DbTweet {
                    id: generate_id(Kind::Tweet),
                    user_id: user_id.to_string(),
                    message: message.to_string(),
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                };
                data.tweets.push(tweet.clone());
                Ok(tweet)
            })
            .await?;
        info!(tweet_id = %tweet.id, user_id, "created tweet");
        Ok(tweet)
    }
}
