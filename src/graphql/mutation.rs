use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::bound;
use crate::models::{Favorite, Tweet};
use crate::resolvers::{FavoriteArgs, NewTweet};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_tweet(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        body: String,
    ) -> Result<Tweet> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers
            .mutation
            .create_tweet(NewTweet { user_id, body }, rctx)
            .await
            .map_err(|e| e.extend())
    }

    async fn create_favorite(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        tweet_id: String,
    ) -> Result<Favorite> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers
            .mutation
            .create_favorite(FavoriteArgs { user_id, tweet_id }, rctx)
            .await
            .map_err(|e| e.extend())
    }

    /// Null when the user had not favorited the tweet.
    async fn delete_favorite(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        tweet_id: String,
    ) -> Result<Option<Favorite>> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers
            .mutation
            .delete_favorite(FavoriteArgs { user_id, tweet_id }, rctx)
            .await
            .map_err(|e| e.extend())
    }
}
