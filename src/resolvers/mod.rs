//! Field resolvers, one trait per GraphQL type.
//!
//! Every resolver takes its parent object (where the type has one), its
//! arguments and the request's [`ResolverContext`]. The GraphQL binding in
//! [`crate::graphql`] only delegates here, so each resolver can be driven
//! directly against a context in tests.

mod mutation;
mod query;
mod tweet;
mod user;

use std::sync::Arc;

use async_trait::async_trait;

use crate::context::ResolverContext;
use crate::errors::{Error, Result};
use crate::models::{
    DbFavorite, DbTweet, DbUser, Favorite, Suggestion, Trend, Tweet, TweetStats, User, UserStats,
};
use crate::schema::Kind;
use crate::transforms::{favorite_transform, tweet_transform};

/// Not tracked yet; every tweet reports these.
pub const PLACEHOLDER_COMMENT_COUNT: i32 = 99;
pub const PLACEHOLDER_RETWEET_COUNT: i32 = 1;
/// Not tracked yet; every user reports these.
pub const PLACEHOLDER_FOLLOWING_COUNT: i32 = 123;
pub const PLACEHOLDER_FOLLOWER_COUNT: i32 = 456_789;

#[derive(Debug, Clone, Validate)]
pub struct NewTweet {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1, max = 280))]
    pub body: String,
}

#[derive(Debug, Clone, Validate)]
pub struct FavoriteArgs {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub tweet_id: String,
}

#[async_trait]
pub trait QueryResolver: Send + Sync {
    /// The first stored user; `EmptyStore` when there are none.
    async fn current_user(&self, ctx: &ResolverContext) -> Result<User>;
    async fn suggestions(&self, ctx: &ResolverContext) -> Result<Vec<Suggestion>>;
    /// The timeline. Primes the user cache, favorite counts and tweet cache
    /// before returning.
    async fn tweets(&self, ctx: &ResolverContext) -> Result<Vec<Tweet>>;
    async fn trends(&self, ctx: &ResolverContext) -> Result<Vec<Trend>>;
}

#[async_trait]
pub trait MutationResolver: Send + Sync {
    async fn create_tweet(&self, args: NewTweet, ctx: &ResolverContext) -> Result<Tweet>;
    async fn create_favorite(&self, args: FavoriteArgs, ctx: &ResolverContext)
        -> Result<Favorite>;
    async fn delete_favorite(
        &self,
        args: FavoriteArgs,
        ctx: &ResolverContext,
    ) -> Result<Option<Favorite>>;
}

/// Reads only the request caches; never suspends.
pub trait TweetResolver: Send + Sync {
    fn author(&self, tweet: &Tweet, ctx: &ResolverContext) -> Result<User>;
    fn stats(&self, tweet: &Tweet, ctx: &ResolverContext) -> Result<TweetStats>;
    fn favorited(&self, tweet: &Tweet, ctx: &ResolverContext) -> Result<bool>;
}

#[async_trait]
pub trait UserResolver: Send + Sync {
    async fn stats(&self, user: &User, ctx: &ResolverContext) -> Result<UserStats>;
    async fn favorites(&self, user: &User, ctx: &ResolverContext) -> Result<Vec<Favorite>>;
}

/// The default resolvers, backed by the entity store.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterResolvers;

/// The resolvers registered with the schema.
#[derive(Clone)]
pub struct ResolverSet {
    pub query: Arc<dyn QueryResolver>,
    pub mutation: Arc<dyn MutationResolver>,
    pub tweet: Arc<dyn TweetResolver>,
    pub user: Arc<dyn UserResolver>,
}

impl Default for ResolverSet {
    fn default() -> Self {
        ResolverSet {
            query: Arc::new(TwitterResolvers),
            mutation: Arc::new(TwitterResolvers),
            tweet: Arc::new(TwitterResolvers),
            user: Arc::new(TwitterResolvers),
        }
    }
}

/// A user by id, from the user cache when primed, else from the store (and
/// then cached).
async fn load_user(ctx: &ResolverContext, id: &str) -> Result<DbUser> {
    if let Some(user) = ctx.user_cache().get(id) {
        return Ok(user);
    }
    let user = ctx
        .db()
        .get_user_by_id(id)
        .await
        .ok_or_else(|| Error::not_found(Kind::User, id))?;
    ctx.user_cache().insert(user.id.clone(), user.clone());
    Ok(user)
}

/// Caches `tweet` along with its author so that `Tweet.author` resolves for it.
async fn prime_tweet(ctx: &ResolverContext, tweet: &DbTweet) -> Result<()> {
    ctx.tweet_cache().insert(tweet.id.clone(), tweet.clone());
    load_user(ctx, &tweet.user_id).await?;
    Ok(())
}

/// Attaches `user` and the favorited tweet, priming the tweet for nested fields.
async fn compose_favorite(
    ctx: &ResolverContext,
    favorite: &DbFavorite,
    user: User,
) -> Result<Favorite> {
    let tweet = match ctx.tweet_cache().get(favorite.tweet_id.as_str()) {
        Some(tweet) => tweet,
        None => ctx
            .db()
            .get_tweet_by_id(&favorite.tweet_id)
            .await
            .ok_or_else(|| Error::not_found(Kind::Tweet, &favorite.tweet_id))?,
    };
    prime_tweet(ctx, &tweet).await?;
    Ok(Favorite::compose(
        favorite_transform(favorite),
        user,
        tweet_transform(&tweet),
    ))
}

fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
