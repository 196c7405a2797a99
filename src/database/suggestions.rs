use super::{generate_id, Db};
use crate::errors::Result;
use crate::models::{DbSuggestion, NewSuggestion};
use crate::schema::Kind;

impl Db {
    pub async fn get_all_suggestions(&self) -> Vec<DbSuggestion> {
        self.read().await.suggestions.clone()
    }

    pub async fn create_suggestion(&self, props: NewSuggestion) -> Result<DbSuggestion> {
        let suggestion = DbSuggestion {
            id: generate_id(Kind::Suggestion),
            name: props.name,
            handle: props.handle,
            avatar_url: props.avatar_url,
            reason: props.reason,
        };
        let stored = suggestion.clone();
        self.commit(move |data| {
            data.suggestions.push(stored);
            Ok(())
        })
        .await?;
        Ok(suggestion)
    }
}
