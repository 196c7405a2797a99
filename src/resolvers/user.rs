use async_trait::async_trait;

use super::{
    compose_favorite, count, TwitterResolvers, UserResolver, PLACEHOLDER_FOLLOWER_COUNT,
    PLACEHOLDER_FOLLOWING_COUNT,
};
use crate::context::ResolverContext;
use crate::errors::Result;
use crate::models::{Favorite, User, UserStats};

#[async_trait]
impl UserResolver for TwitterResolvers {
    /// Scans the store directly: only the current user's profile asks for this,
    /// once per request.
    async fn stats(&self, user: &User, ctx: &ResolverContext) -> Result<UserStats> {
        let tweets = ctx.db().get_user_tweets(&user.id).await;
        Ok(UserStats {
            following_count: PLACEHOLDER_FOLLOWING_COUNT,
            follower_count: PLACEHOLDER_FOLLOWER_COUNT,
            tweet_count: count(tweets.len()),
        })
    }

    async fn favorites(&self, user: &User, ctx: &ResolverContext) -> Result<Vec<Favorite>> {
        let stored = ctx.db().get_user_favorites(&user.id).await;
        let mut favorites = Vec::with_capacity(stored.len());
        for favorite in &stored {
            favorites.push(compose_favorite(ctx, favorite, user.clone()).await?);
        }
        Ok(favorites)
    }
}
