use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The caller behind a valid session token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub email: String,
    pub is_admin: bool,
}

impl SessionUser {
    /// Admins may read and act on any assessment; everyone else only their own.
    pub fn can_access(&self, owner_id: Uuid) -> bool {
        self.is_admin || self.user_id == owner_id
    }
}
