use async_graphql::{SimpleObject, Union};
use serde::{Deserialize, Serialize};

/// Stored as `"kind": "hashtag"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashtagKind {
    #[default]
    Hashtag,
}

/// Stored as `"kind": "topic"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKind {
    #[default]
    Topic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbHashtagTrend {
    pub id: String,
    #[serde(default)]
    pub kind: HashtagKind,
    pub hashtag: String,
    pub tweet_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbTopicTrend {
    pub id: String,
    #[serde(default)]
    pub kind: TopicKind,
    pub topic: String,
    pub tweet_count: i32,
    /// Filled in on read from `topicTrendQuotes`; never persisted on the trend itself.
    #[serde(default, skip_serializing)]
    pub quote: Option<DbTopicTrendQuote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbTopicTrendQuote {
    pub id: String,
    pub topic_trend_id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct NewQuote {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DbTrend {
    Hashtag(DbHashtagTrend),
    Topic(DbTopicTrend),
}

impl DbTrend {
    pub fn tweet_count(&self) -> i32 {
        match self {
            DbTrend::Hashtag(t) => t.tweet_count,
            DbTrend::Topic(t) => t.tweet_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct HashtagTrend {
    pub hashtag: String,
    pub tweet_count: i32,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct TopicTrendQuote {
    pub title: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct TopicTrend {
    pub topic: String,
    pub tweet_count: i32,
    pub quote: Option<TopicTrendQuote>,
}

#[derive(Debug, Clone, PartialEq, Union)]
pub enum Trend {
    Hashtag(HashtagTrend),
    Topic(TopicTrend),
}

impl From<DbTrend> for Trend {
    fn from(trend: DbTrend) -> Self {
        match trend {
            DbTrend::Hashtag(t) => Trend::Hashtag(HashtagTrend {
                hashtag: t.hashtag,
                tweet_count: t.tweet_count,
            }),
            DbTrend::Topic(t) => Trend::Topic(TopicTrend {
                topic: t.topic,
                tweet_count: t.tweet_count,
                quote: t.quote.map(|q| TopicTrendQuote {
                    title: q.title,
                    image_url: q.image_url,
                    description: q.description,
                }),
            }),
        }
    }
}
