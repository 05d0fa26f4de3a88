use crate::inquiry::{Inquiry, InquiryStatus};
use crate::user::UserAccount;
use async_trait::async_trait;
use uuid::Uuid;

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for back-office user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save_user(&self, user: &UserAccount) -> Result<(), RepoError>;

    async fn get_user(&self, id: Uuid) -> Result<Option<UserAccount>, RepoError>;

    async fn list_users(&self) -> Result<Vec<UserAccount>, RepoError>;

    async fn set_user_active(&self, id: Uuid, is_active: bool) -> Result<(), RepoError>;
}

/// Repository trait for contact-form inquiries
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn save_inquiry(&self, inquiry: &Inquiry) -> Result<(), RepoError>;

    async fn get_inquiry(&self, id: Uuid) -> Result<Option<Inquiry>, RepoError>;

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, RepoError>;

    async fn update_inquiry_status(&self, id: Uuid, status: InquiryStatus) -> Result<(), RepoError>;
}
