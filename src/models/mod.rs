//! Record shapes.
//!
//! `Db*` types are what the store persists; the rest are the shapes the API
//! exposes. [`crate::transforms`] maps from the former to the latter.

pub mod favorite;
pub mod suggestion;
pub mod trend;
pub mod tweet;
pub mod user;

pub use favorite::{DbFavorite, Favorite, FavoriteBase};
pub use suggestion::{DbSuggestion, NewSuggestion, Suggestion};
pub use trend::{
    DbHashtagTrend, DbTopicTrend, DbTopicTrendQuote, DbTrend, HashtagKind, HashtagTrend, NewQuote,
    TopicKind, TopicTrend, TopicTrendQuote, Trend,
};
pub use tweet::{DbTweet, Tweet, TweetStats};
pub use user::{DbUser, NewUser, User, UserStats};
