use super::{
    TweetResolver, TwitterResolvers, PLACEHOLDER_COMMENT_COUNT, PLACEHOLDER_RETWEET_COUNT,
};
use crate::context::ResolverContext;
use crate::errors::Result;
use crate::models::{Tweet, TweetStats, User};
use crate::transforms::user_transform;

impl TweetResolver for TwitterResolvers {
    fn author(&self, tweet: &Tweet, ctx: &ResolverContext) -> Result<User> {
        let stored = ctx
            .tweet_cache()
            .get_or_fail(tweet.id.as_str(), "Tweet.author")?;
        let author = ctx
            .user_cache()
            .get_or_fail(stored.user_id.as_str(), "Tweet.author")?;
        Ok(user_transform(&author))
    }

    fn stats(&self, tweet: &Tweet, ctx: &ResolverContext) -> Result<TweetStats> {
        Ok(TweetStats {
            comment_count: PLACEHOLDER_COMMENT_COUNT,
            retweet_count: PLACEHOLDER_RETWEET_COUNT,
            favorite_count: ctx.favorite_count(&tweet.id),
        })
    }

    fn favorited(&self, tweet: &Tweet, ctx: &ResolverContext) -> Result<bool> {
        Ok(ctx.favorited_by_viewer(&tweet.id))
    }
}
