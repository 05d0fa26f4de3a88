use chrono::{DateTime, Utc};
use makao_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Agent,
    Customer,
}

/// A back-office-managed account. There is no authentication in this system;
/// accounts exist so the admin screens have rows to manage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<Masked<String>>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(full_name: String, email: String, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            phone: None,
            role,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
