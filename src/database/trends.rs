use std::collections::HashMap;

use super::{generate_id, Db};
use crate::errors::Result;
use crate::models::{
    DbHashtagTrend, DbTopicTrend, DbTopicTrendQuote, DbTrend, HashtagKind, NewQuote, TopicKind,
};
use crate::schema::Kind;

impl Db {
    /// Hashtag and topic trends merged, highest tweet count first. Topic trends
    /// carry their quote when one was stored for them; with several, the
    /// earliest stored wins.
    pub async fn get_all_trends(&self) -> Vec<DbTrend> {
        let data = self.read().await;

        let quotes: HashMap<&str, &DbTopicTrendQuote> = data
            .topic_trend_quotes
            .iter()
            .rev()
            .map(|q| (q.topic_trend_id.as_str(), q))
            .collect();

        let mut trends: Vec<DbTrend> = data
            .hashtag_trends
            .iter()
            .rev()
            .cloned()
            .map(DbTrend::Hashtag)
            .chain(data.topic_trends.iter().rev().map(|t| {
                DbTrend::Topic(DbTopicTrend {
                    quote: quotes.get(t.id.as_str()).map(|q| (*q).clone()),
                    ..t.clone()
                })
            }))
            .collect();
        trends.sort_by(|a, b| b.tweet_count().cmp(&a.tweet_count()));
        trends
    }

    pub async fn create_hashtag_trend(
        &self,
        hashtag: &str,
        tweet_count: i32,
    ) -> Result<DbHashtagTrend> {
        let trend = DbHashtagTrend {
            id: generate_id(Kind::HashtagTrend),
            kind: HashtagKind::Hashtag,
            hashtag: hashtag.to_string(),
            tweet_count,
        };
        let stored = trend.clone();
        self.commit(move |data| {
            data.hashtag_trends.push(stored);
            Ok(())
        })
        .await?;
        Ok(trend)
    }

    /// The trend and its optional quote land in a single write.
    pub async fn create_topic_trend(
        &self,
        topic: &str,
        tweet_count: i32,
        quote: Option<NewQuote>,
    ) -> Result<DbTopicTrend> {
        let id = generate_id(Kind::TopicTrend);
        let quote = quote.map(|q| DbTopicTrendQuote {
            id: generate_id(Kind::TopicTrendQuote),
            topic_trend_id: id.clone(),
            title: q.title,
            description: q.description,
            image_url: q.image_url,
        });
        let trend = DbTopicTrend {
            id,
            kind: TopicKind::Topic,
            topic: topic.to_string(),
            tweet_count,
            quote: None,
        };

        let (stored_trend, stored_quote) = (trend.clone(), quote.clone());
        self.commit(move |data| {
            data.topic_trends.push(stored_trend);
            data.topic_trend_quotes.extend(stored_quote);
            Ok(())
        })
        .await?;

        Ok(DbTopicTrend { quote, ..trend })
    }
}
