use async_trait::async_trait;
use tracing::debug;

use super::{
    compose_favorite, load_user, prime_tweet, FavoriteArgs, MutationResolver, NewTweet,
    TwitterResolvers,
};
use crate::context::ResolverContext;
use crate::errors::{validate, Result};
use crate::models::{Favorite, Tweet};
use crate::transforms::{tweet_transform, user_transform};

impl TwitterResolvers {
    /// Re-reads one tweet's favorites after a write so `stats` and `favorited`
    /// in the response agree with the store.
    async fn refresh_favorites(&self, ctx: &ResolverContext, tweet_id: &str) {
        ctx.prime_users().await;
        let favorites = ctx.db().get_favorites_for_tweet(tweet_id).await;
        ctx.set_tweet_favorites(tweet_id, &favorites);
    }
}

#[async_trait]
impl MutationResolver for TwitterResolvers {
    /// Writes through the store, then primes the new tweet and its author so
    /// nested fields of the response resolve.
    async fn create_tweet(&self, args: NewTweet, ctx: &ResolverContext) -> Result<Tweet> {
        validate(&args)?;
        let tweet = ctx.db().create_tweet(&args.user_id, &args.body).await?;
        prime_tweet(ctx, &tweet).await?;
        debug!(tweet_id = %tweet.id, "primed created tweet");
        Ok(tweet_transform(&tweet))
    }

    async fn create_favorite(
        &self,
        args: FavoriteArgs,
        ctx: &ResolverContext,
    ) -> Result<Favorite> {
        validate(&args)?;
        let favorite = ctx
            .db()
            .create_favorite(&args.user_id, &args.tweet_id)
            .await?;
        let user = load_user(ctx, &favorite.user_id).await?;
        self.refresh_favorites(ctx, &favorite.tweet_id).await;
        compose_favorite(ctx, &favorite, user_transform(&user)).await
    }

    async fn delete_favorite(
        &self,
        args: FavoriteArgs,
        ctx: &ResolverContext,
    ) -> Result<Option<Favorite>> {
        validate(&args)?;
        let Some(favorite) = ctx
            .db()
            .delete_favorite(&args.user_id, &args.tweet_id)
            .await?
        else {
            return Ok(None);
        };
        let user = load_user(ctx, &favorite.user_id).await?;
        self.refresh_favorites(ctx, &favorite.tweet_id).await;
        compose_favorite(ctx, &favorite, user_transform(&user))
            .await
            .map(Some)
    }
}
