use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// "Who to follow" entry shown beside the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbSuggestion {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub avatar_url: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct NewSuggestion {
    pub name: String,
    pub handle: String,
    pub avatar_url: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Suggestion {
    pub name: String,
    pub handle: String,
    pub avatar_url: String,
    pub reason: String,
}

impl From<DbSuggestion> for Suggestion {
    fn from(s: DbSuggestion) -> Self {
        Suggestion {
            name: s.name,
            handle: s.handle,
            avatar_url: s.avatar_url,
            reason: s.reason,
        }
    }
}
