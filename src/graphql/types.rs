use async_graphql::{ComplexObject, Context, ErrorExtensions, Result};

use super::bound;
use crate::models::{Favorite, Tweet, TweetStats, User, UserStats};

#[ComplexObject]
impl Tweet {
    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers.tweet.author(self, rctx).map_err(|e| e.extend())
    }

    async fn stats(&self, ctx: &Context<'_>) -> Result<TweetStats> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers.tweet.stats(self, rctx).map_err(|e| e.extend())
    }

    /// Whether the current user has favorited this tweet.
    async fn favorited(&self, ctx: &Context<'_>) -> Result<bool> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers.tweet.favorited(self, rctx).map_err(|e| e.extend())
    }
}

#[ComplexObject]
impl User {
    async fn stats(&self, ctx: &Context<'_>) -> Result<UserStats> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers.user.stats(self, rctx).await.map_err(|e| e.extend())
    }

    async fn favorites(&self, ctx: &Context<'_>) -> Result<Vec<Favorite>> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers.user.favorites(self, rctx).await.map_err(|e| e.extend())
    }
}
