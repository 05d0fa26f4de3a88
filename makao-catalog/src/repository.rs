use crate::listing::Listing;
use async_trait::async_trait;
use uuid::Uuid;

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for listing data access
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Insert or replace a listing.
    async fn save_listing(&self, listing: &Listing) -> Result<(), RepoError>;

    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, RepoError>;

    /// All listings in insertion order.
    async fn list_listings(&self) -> Result<Vec<Listing>, RepoError>;

    async fn delete_listing(&self, id: Uuid) -> Result<(), RepoError>;
}
