use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::bound;
use crate::models::{Suggestion, Trend, Tweet, User};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The signed-in user. There is no authentication; this is the first stored user.
    async fn current_user(&self, ctx: &Context<'_>) -> Result<User> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers
            .query
            .current_user(rctx)
            .await
            .map_err(|e| e.extend())
    }

    async fn suggestions(&self, ctx: &Context<'_>) -> Result<Vec<Suggestion>> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers.query.suggestions(rctx).await.map_err(|e| e.extend())
    }

    /// Every tweet, newest first.
    async fn tweets(&self, ctx: &Context<'_>) -> Result<Vec<Tweet>> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers.query.tweets(rctx).await.map_err(|e| e.extend())
    }

    /// Hashtag and topic trends, highest tweet count first.
    async fn trends(&self, ctx: &Context<'_>) -> Result<Vec<Trend>> {
        let (resolvers, rctx) = bound(ctx)?;
        resolvers.query.trends(rctx).await.map_err(|e| e.extend())
    }
}
