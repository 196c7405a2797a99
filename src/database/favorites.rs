use chrono::Utc;
use tracing::info;

use super::{generate_id, Db};
use crate::errors::{Error, Result};
use crate::models::DbFavorite;
use crate::schema::{DbSchema, Kind};

/// Both ends of a favorite must exist before it can be created or removed.
fn check_refs(data: &DbSchema, user_id: &str, tweet_id: &str) -> Result<()> {
    if !data.users.iter().any(|u| u.id == user_id) {
        return Err(Error::not_found(Kind::User, user_id));
    }
    if !data.tweets.iter().any(|t| t.id == tweet_id) {
        return Err(Error::not_found(Kind::Tweet, tweet_id));
    }
    Ok(())
}

impl Db {
    pub async fn get_all_favorites(&self) -> Vec<DbFavorite> {
        self.read().await.favorites.clone()
    }

    pub async fn get_user_favorites(&self, user_id: &str) -> Vec<DbFavorite> {
        self.read()
            .await
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn get_favorites_for_tweet(&self, tweet_id: &str) -> Vec<DbFavorite> {
        self.read()
            .await
            .favorites
            .iter()
            .filter(|f| f.tweet_id == tweet_id)
            .cloned()
            .collect()
    }

    pub async fn get_favorite_count_for_tweet(&self, tweet_id: &str) -> usize {
        self.read()
            .await
            .favorites
            .iter()
            .filter(|f| f.tweet_id == tweet_id)
            .count()
    }

    /// Uniqueness per (user, tweet) is left to the caller.
    pub async fn create_favorite(&self, user_id: &str, tweet_id: &str) -> Result<DbFavorite> {
        let favorite = self
            .commit(|data| {
                check_refs(data, user_id, tweet_id)?;
                let now = Utc::now();
                let favorite = DbFavorite {
                    id: generate_id(Kind::Favorite),
                    user_id: user_id.to_string(),
                    tweet_id: tweet_id.to_string(),
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                };
                data.favorites.push(favorite.clone());
                Ok(favorite)
            })
            .await?;
        info!(favorite_id = %favorite.id, user_id, tweet_id, "created favorite");
        Ok(favorite)
    }

    /// Removes every favorite of `tweet_id` by `user_id` and returns the first
    /// one removed, or `None` when there was nothing to remove.
    pub async fn delete_favorite(
        &self,
        user_id: &str,
        tweet_id: &str,
    ) -> Result<Option<DbFavorite>> {
        let removed = self
            .commit(|data| {
                check_refs(data, user_id, tweet_id)?;
                let (removed, kept): (Vec<DbFavorite>, Vec<DbFavorite>) =
                    std::mem::take(&mut data.favorites)
                        .into_iter()
                        .partition(|f| f.user_id == user_id && f.tweet_id == tweet_id);
                data.favorites = kept;
                Ok(removed)
            })
            .await?;
        if !removed.is_empty() {
            info!(user_id, tweet_id, removed = removed.len(), "deleted favorite");
        }
        Ok(removed.into_iter().next())
    }
}
