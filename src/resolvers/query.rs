use async_trait::async_trait;
use tracing::debug;

use super::{QueryResolver, TwitterResolvers};
use crate::context::ResolverContext;
use crate::errors::{Error, Result};
use crate::models::{Suggestion, Trend, Tweet, User};
use crate::transforms::{tweet_transform, user_transform};

#[async_trait]
impl QueryResolver for TwitterResolvers {
    async fn current_user(&self, ctx: &ResolverContext) -> Result<User> {
        ctx.prime_users().await;
        let id = ctx.viewer().ok_or(Error::EmptyStore {
            field: "currentUser",
        })?;
        let user = ctx.user_cache().get_or_fail(id.as_str(), "Query.currentUser")?;
        Ok(user_transform(&user))
    }

    async fn suggestions(&self, ctx: &ResolverContext) -> Result<Vec<Suggestion>> {
        Ok(ctx
            .db()
            .get_all_suggestions()
            .await
            .into_iter()
            .map(Suggestion::from)
            .collect())
    }

    async fn tweets(&self, ctx: &ResolverContext) -> Result<Vec<Tweet>> {
        ctx.prime_users().await;
        ctx.prime_favorites().await;

        let tweets = ctx.db().get_all_tweets().await;
        ctx.tweet_cache()
            .extend(tweets.iter().map(|t| (t.id.clone(), t.clone())));
        debug!(tweets = tweets.len(), "primed tweet cache");

        Ok(tweets.iter().map(tweet_transform).collect())
    }

    async fn trends(&self, ctx: &ResolverContext) -> Result<Vec<Trend>> {
        Ok(ctx
            .db()
            .get_all_trends()
            .await
            .into_iter()
            .map(Trend::from)
            .collect())
    }
}
