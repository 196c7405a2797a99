//! Per-request resolver context.
//!
//! A [`ResolverContext`] is built fresh for every GraphQL request and dropped
//! with it. List resolvers prime its caches in bulk; field resolvers further
//! down the tree read them instead of scanning the store again.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::database::Db;
use crate::errors::{CachedEntity, Error, Result};
use crate::models::{DbFavorite, DbTweet, DbUser};

/// A memo map whose misses on required entries are contract violations.
pub struct RequestCache<K, V> {
    entity: CachedEntity,
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> RequestCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(entity: CachedEntity) -> Self {
        RequestCache {
            entity,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, key: K, value: V) {
        self.entries.lock().insert(key, value);
    }

    pub fn extend(&self, items: impl IntoIterator<Item = (K, V)>) {
        self.entries.lock().extend(items);
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.lock().get(key).cloned()
    }

    /// Looks up an entry a parent resolver was required to prime. `lookup`
    /// names the field being resolved so the error says who went looking.
    pub fn get_or_fail<Q>(&self, key: &Q, lookup: &'static str) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ToString + ?Sized,
    {
        self.get(key).ok_or_else(|| {
            let err = Error::CacheContractViolation {
                lookup,
                entity: self.entity,
                key: key.to_string(),
            };
            warn!(error = %err, "resolver cache miss");
            err
        })
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

pub type TweetCache = RequestCache<String, DbTweet>;
pub type UserCache = RequestCache<String, DbUser>;

/// Everything a resolver may touch while one request is resolved.
pub struct ResolverContext {
    db: Db,
    tweets: TweetCache,
    users: UserCache,
    favorite_counts: Mutex<HashMap<String, i32>>,
    favorited_by: Mutex<HashMap<String, HashSet<String>>>,
    users_loaded: OnceCell<()>,
    favorites_loaded: OnceCell<()>,
    viewer: Mutex<Option<String>>,
}

impl ResolverContext {
    pub fn new(db: Db) -> Self {
        ResolverContext {
            db,
            tweets: RequestCache::new(CachedEntity::Tweet),
            users: RequestCache::new(CachedEntity::User),
            favorite_counts: Mutex::new(HashMap::new()),
            favorited_by: Mutex::new(HashMap::new()),
            users_loaded: OnceCell::new(),
            favorites_loaded: OnceCell::new(),
            viewer: Mutex::new(None),
        }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn tweet_cache(&self) -> &TweetCache {
        &self.tweets
    }

    pub fn user_cache(&self) -> &UserCache {
        &self.users
    }

    /// Loads every user into the user cache, at most once per request even when
    /// sibling resolvers ask concurrently. The first stored user becomes the viewer.
    pub async fn prime_users(&self) {
        self.users_loaded
            .get_or_init(|| async {
                let users = self.db.get_all_users().await;
                *self.viewer.lock() = users.first().map(|u| u.id.clone());
                debug!(users = users.len(), "primed user cache");
                self.users.extend(users.into_iter().map(|u| (u.id.clone(), u)));
            })
            .await;
    }

    /// One pass over every favorite, building per-tweet counts and likers.
    pub async fn prime_favorites(&self) {
        self.favorites_loaded
            .get_or_init(|| async {
                let favorites = self.db.get_all_favorites().await;
                let mut counts = self.favorite_counts.lock();
                let mut likers = self.favorited_by.lock();
                for favorite in &favorites {
                    *counts.entry(favorite.tweet_id.clone()).or_insert(0) += 1;
                    likers
                        .entry(favorite.tweet_id.clone())
                        .or_default()
                        .insert(favorite.user_id.clone());
                }
                debug!(favorites = favorites.len(), tweets = counts.len(), "primed favorite counts");
            })
            .await;
    }

    /// The current user: the first stored user, once users are primed.
    pub fn viewer(&self) -> Option<String> {
        self.viewer.lock().clone()
    }

    /// Replaces what this request knows about one tweet's favorites.
    pub fn set_tweet_favorites(&self, tweet_id: &str, favorites: &[DbFavorite]) {
        let count = i32::try_from(favorites.len()).unwrap_or(i32::MAX);
        self.favorite_counts
            .lock()
            .insert(tweet_id.to_string(), count);
        self.favorited_by.lock().insert(
            tweet_id.to_string(),
            favorites.iter().map(|f| f.user_id.clone()).collect(),
        );
    }

    /// Zero when nothing was primed for `tweet_id`.
    pub fn favorite_count(&self, tweet_id: &str) -> i32 {
        self.favorite_counts
            .lock()
            .get(tweet_id)
            .copied()
            .unwrap_or(0)
    }

    /// Whether the viewer has favorited `tweet_id`, as far as this request knows.
    pub fn favorited_by_viewer(&self, tweet_id: &str) -> bool {
        let viewer = self.viewer.lock();
        let Some(viewer) = viewer.as_deref() else {
            return false;
        };
        self.favorited_by
            .lock()
            .get(tweet_id)
            .is_some_and(|likers| likers.contains(viewer))
    }
}
