use chrono::Utc;
use tracing::info;

use super::{generate_id, Db};
use crate::errors::Result;
use crate::models::{DbUser, NewUser};
use crate::schema::Kind;

impl Db {
    pub async fn get_user_by_id(&self, id: &str) -> Option<DbUser> {
        self.read().await.users.iter().find(|u| u.id == id).cloned()
    }

    /// Every user, in insertion order.
    pub async fn get_all_users(&self) -> Vec<DbUser> {
        self.count_user_scan();
        self.read().await.users.clone()
    }

    pub async fn has_user(&self, predicate: impl Fn(&DbUser) -> bool) -> bool {
        self.read().await.users.iter().any(predicate)
    }

    pub async fn create_user(&self, props: NewUser) -> Result<DbUser> {
        let now = Utc::now();
        let user = DbUser {
            id: generate_id(Kind::User),
            name: props.name,
            handle: props.handle,
            avatar_url: props.avatar_url,
            cover_url: props.cover_url,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let stored = user.clone();
        self.commit(move |data| {
            data.users.push(stored);
            Ok(())
        })
        .await?;
        info!(user_id = %user.id, handle = %user.handle, "created user");
        Ok(user)
    }
}
