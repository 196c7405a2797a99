//! Pure mappings from stored records to API shapes.
//!
//! None of these look anything up; attaching relations (a tweet's author, a
//! favorite's user and tweet) is left to the resolvers.

use chrono::{DateTime, Utc};

use crate::config::DATE_FORMAT;
use crate::models::{DbFavorite, DbTweet, DbUser, FavoriteBase, Tweet, User};

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(DATE_FORMAT).to_string()
}

/// `message` becomes `body`; the owning user id is not exposed.
pub fn tweet_transform(t: &DbTweet) -> Tweet {
    Tweet {
        id: t.id.clone(),
        body: t.message.clone(),
        created_at: format_timestamp(&t.created_at),
        updated_at: format_timestamp(&t.updated_at),
    }
}

/// Drops both foreign keys.
pub fn favorite_transform(f: &DbFavorite) -> FavoriteBase {
    FavoriteBase {
        id: f.id.clone(),
        created_at: format_timestamp(&f.created_at),
        updated_at: format_timestamp(&f.updated_at),
    }
}

pub fn user_transform(u: &DbUser) -> User {
    User {
        id: u.id.clone(),
        name: u.name.clone(),
        handle: u.handle.clone(),
        cover_url: u.cover_url.clone(),
        avatar_url: u.avatar_url.clone(),
        created_at: format_timestamp(&u.created_at),
        updated_at: format_timestamp(&u.updated_at),
    }
}
