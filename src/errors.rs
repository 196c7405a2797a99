use async_graphql::ErrorExtensions;
use validator::{Validate, ValidationErrors};

use crate::schema::Kind;

pub type Result<T> = std::result::Result<T, Error>;

/// Which per-request cache a resolver expected to find primed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachedEntity {
    Tweet,
    User,
}

impl std::fmt::Display for CachedEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CachedEntity::Tweet => f.write_str("tweet"),
            CachedEntity::User => f.write_str("user"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{kind} {id} does not exist")]
    NotFound { kind: Kind, id: String },

    /// A field resolver ran before its parent primed the cache it reads.
    #[error("{lookup} lookup failed: {entity} not primed (key {key})")]
    CacheContractViolation {
        lookup: &'static str,
        entity: CachedEntity,
        key: String,
    },

    #[error("{field} was requested, but there are no users in the store")]
    EmptyStore { field: &'static str },

    #[error("invalid input for: {fields}")]
    Validation { fields: String },

    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store document is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn not_found(kind: Kind, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NOT_FOUND",
            Error::CacheContractViolation { .. } => "CACHE_CONTRACT_VIOLATION",
            Error::EmptyStore { .. } => "EMPTY_STORE",
            Error::Validation { .. } => "BAD_USER_INPUT",
            Error::Io(_) | Error::Json(_) => "INTERNAL",
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        Error::Validation {
            fields: fields.join(", "),
        }
    }
}

impl ErrorExtensions for Error {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Runs the derived validations of a mutation's arguments.
pub fn validate<T: Validate>(model: &T) -> Result<()> {
    model.validate().map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_violations_name_the_missing_entity() {
        let tweet = Error::CacheContractViolation {
            lookup: "Tweet.author",
            entity: CachedEntity::Tweet,
            key: "tweet-1".into(),
        };
        let user = Error::CacheContractViolation {
            lookup: "Tweet.author",
            entity: CachedEntity::User,
            key: "user-1".into(),
        };
        assert_eq!(
            tweet.to_string(),
            "Tweet.author lookup failed: tweet not primed (key tweet-1)"
        );
        assert_eq!(
            user.to_string(),
            "Tweet.author lookup failed: user not primed (key user-1)"
        );
    }

    #[test]
    fn extensions_carry_the_code() {
        let err = Error::not_found(Kind::Tweet, "tweet-x").extend();
        assert_eq!(err.message, "Tweet tweet-x does not exist");
        let ext = err.extensions.expect("extensions set");
        assert_eq!(ext.get("code"), Some(&async_graphql::Value::from("NOT_FOUND")));
    }
}
