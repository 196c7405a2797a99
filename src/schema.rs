//! Layout of the persisted JSON document.
//!
//! Every collection is a top-level array. Arrays missing from a file on disk
//! load as empty, so an older or hand-written document still opens.

use serde::{Deserialize, Serialize};

use crate::models::{
    DbFavorite, DbHashtagTrend, DbSuggestion, DbTopicTrend, DbTopicTrendQuote, DbTweet, DbUser,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbSchema {
    pub tweets: Vec<DbTweet>,
    pub users: Vec<DbUser>,
    pub favorites: Vec<DbFavorite>,
    pub hashtag_trends: Vec<DbHashtagTrend>,
    pub topic_trends: Vec<DbTopicTrend>,
    pub topic_trend_quotes: Vec<DbTopicTrendQuote>,
    pub suggestions: Vec<DbSuggestion>,
}

/// Id prefix of each entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    User,
    Tweet,
    Favorite,
    Suggestion,
    HashtagTrend,
    TopicTrend,
    TopicTrendQuote,
}

impl Kind {
    pub fn prefix(self) -> &'static str {
        match self {
            Kind::User => "user",
            Kind::Tweet => "tweet",
            Kind::Favorite => "favorite",
            Kind::Suggestion => "suggestion",
            Kind::HashtagTrend => "hashtrend",
            Kind::TopicTrend => "topictrend",
            Kind::TopicTrendQuote => "topictrendquote",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::User => "User",
            Kind::Tweet => "Tweet",
            Kind::Favorite => "Favorite",
            Kind::Suggestion => "Suggestion",
            Kind::HashtagTrend => "HashtagTrend",
            Kind::TopicTrend => "TopicTrend",
            Kind::TopicTrendQuote => "TopicTrendQuote",
        };
        f.write_str(name)
    }
}
