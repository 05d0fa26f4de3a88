use async_trait::async_trait;
use makao_booking::booking::{Booking, BookingStatus};
use makao_booking::repository::{BookingRepository, TourRepository};
use makao_booking::tour::{TourRequest, TourStatus};
use makao_catalog::repository::ListingRepository;
use makao_catalog::seed::seed_listings;
use makao_catalog::Listing;
use makao_core::inquiry::{Inquiry, InquiryStatus};
use makao_core::repository::{InquiryRepository, UserRepository};
use makao_core::user::{UserAccount, UserRole};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// The only storage backend in this system: vectors behind async locks,
/// seeded from compiled-in data. Insertion order is preserved so the filter
/// store's stable ordering holds all the way down.
#[derive(Default)]
pub struct MemoryStore {
    listings: RwLock<Vec<Listing>>,
    bookings: RwLock<Vec<Booking>>,
    tours: RwLock<Vec<TourRequest>>,
    inquiries: RwLock<Vec<Inquiry>>,
    users: RwLock<Vec<UserAccount>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the mock inventory plus sample back-office rows.
    pub fn with_sample_data() -> Self {
        let store = Self::new();

        let listings = seed_listings();
        info!(count = listings.len(), "seeding mock inventory");
        *store.listings.try_write().expect("fresh store") = listings;

        let mut users = vec![
            UserAccount::new("Amina Hassan".to_string(), "amina@makao.co.ke".to_string(), UserRole::Admin),
            UserAccount::new("Peter Kamau".to_string(), "peter@makao.co.ke".to_string(), UserRole::Agent),
            UserAccount::new("Grace Njeri".to_string(), "grace.njeri@example.com".to_string(), UserRole::Customer),
        ];
        users[2].is_active = false;
        *store.users.try_write().expect("fresh store") = users;

        let inquiries = vec![
            Inquiry::new(
                None,
                "Daniel Mwangi".to_string(),
                "daniel.mwangi@example.com".to_string(),
                "Do you have rentals under KSh 30,000 around Syokimau?".to_string(),
            ),
            Inquiry::new(
                None,
                "Faith Chebet".to_string(),
                "faith.chebet@example.com".to_string(),
                "Is the Kitengela plot still available for viewing this weekend?".to_string(),
            ),
        ];
        *store.inquiries.try_write().expect("fresh store") = inquiries;

        store
    }
}

fn upsert<T, F>(rows: &mut Vec<T>, row: T, same: F)
where
    F: Fn(&T) -> bool,
{
    match rows.iter_mut().find(|r| same(r)) {
        Some(existing) => *existing = row,
        None => rows.push(row),
    }
}

#[async_trait]
impl ListingRepository for MemoryStore {
    async fn save_listing(&self, listing: &Listing) -> Result<(), RepoError> {
        let mut rows = self.listings.write().await;
        upsert(&mut rows, listing.clone(), |r| r.id == listing.id);
        Ok(())
    }

    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, RepoError> {
        let rows = self.listings.read().await;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list_listings(&self) -> Result<Vec<Listing>, RepoError> {
        Ok(self.listings.read().await.clone())
    }

    async fn delete_listing(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.listings.write().await;
        rows.retain(|r| r.id != id);
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn save_booking(&self, booking: &Booking) -> Result<(), RepoError> {
        let mut rows = self.bookings.write().await;
        upsert(&mut rows, booking.clone(), |r| r.id == booking.id);
        Ok(())
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, RepoError> {
        let rows = self.bookings.read().await;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, RepoError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn update_booking_status(&self, id: Uuid, status: BookingStatus) -> Result<(), RepoError> {
        let mut rows = self.bookings.write().await;
        let booking = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| format!("booking not found: {}", id))?;
        booking.status = status;
        booking.updated_at = chrono::Utc::now();
        Ok(())
    }
}

#[async_trait]
impl TourRepository for MemoryStore {
    async fn save_tour(&self, tour: &TourRequest) -> Result<(), RepoError> {
        let mut rows = self.tours.write().await;
        upsert(&mut rows, tour.clone(), |r| r.id == tour.id);
        Ok(())
    }

    async fn get_tour(&self, id: Uuid) -> Result<Option<TourRequest>, RepoError> {
        let rows = self.tours.read().await;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list_tours(&self) -> Result<Vec<TourRequest>, RepoError> {
        Ok(self.tours.read().await.clone())
    }

    async fn update_tour_status(&self, id: Uuid, status: TourStatus) -> Result<(), RepoError> {
        let mut rows = self.tours.write().await;
        let tour = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| format!("tour request not found: {}", id))?;
        tour.status = status;
        Ok(())
    }
}

#[async_trait]
impl InquiryRepository for MemoryStore {
    async fn save_inquiry(&self, inquiry: &Inquiry) -> Result<(), RepoError> {
        let mut rows = self.inquiries.write().await;
        upsert(&mut rows, inquiry.clone(), |r| r.id == inquiry.id);
        Ok(())
    }

    async fn get_inquiry(&self, id: Uuid) -> Result<Option<Inquiry>, RepoError> {
        let rows = self.inquiries.read().await;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list_inquiries(&self) -> Result<Vec<Inquiry>, RepoError> {
        Ok(self.inquiries.read().await.clone())
    }

    async fn update_inquiry_status(&self, id: Uuid, status: InquiryStatus) -> Result<(), RepoError> {
        let mut rows = self.inquiries.write().await;
        let inquiry = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| format!("inquiry not found: {}", id))?;
        inquiry.status = status;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn save_user(&self, user: &UserAccount) -> Result<(), RepoError> {
        let mut rows = self.users.write().await;
        upsert(&mut rows, user.clone(), |r| r.id == user.id);
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<UserAccount>, RepoError> {
        let rows = self.users.read().await;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<UserAccount>, RepoError> {
        Ok(self.users.read().await.clone())
    }

    async fn set_user_active(&self, id: Uuid, is_active: bool) -> Result<(), RepoError> {
        let mut rows = self.users.write().await;
        let user = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| format!("user not found: {}", id))?;
        user.is_active = is_active;
        Ok(())
    }
}
