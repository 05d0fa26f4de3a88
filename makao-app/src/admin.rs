use crate::error::AppError;
use makao_booking::booking::{Booking, BookingStatus};
use makao_booking::repository::{BookingRepository, TourRepository};
use makao_booking::tour::{TourRequest, TourStatus};
use makao_catalog::repository::ListingRepository;
use makao_catalog::{Listing, ListingCategory};
use makao_core::inquiry::{Inquiry, InquiryStatus};
use makao_core::repository::{InquiryRepository, UserRepository};
use makao_core::user::{UserAccount, UserRole};
use makao_store::MemoryStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, per_page: 10 }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.per_page == 0 {
            0
        } else {
            self.total.div_ceil(self.per_page)
        }
    }
}

fn paginate<T>(rows: Vec<T>, request: PageRequest) -> Page<T> {
    let total = rows.len();
    let page = request.page.max(1);
    let per_page = request.per_page.max(1);

    let items = rows
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Page { items, total, page, per_page }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ============================================================================
// Queries
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Matched against title and location, case-insensitively.
    pub search: Option<String>,
    pub category: Option<ListingCategory>,
    pub active_only: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BookingQuery {
    /// Matched against the reference and the guest name.
    pub search: Option<String>,
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Matched against name and email.
    pub search: Option<String>,
    pub role: Option<UserRole>,
}

// ============================================================================
// Admin service
// ============================================================================

/// Back-office table operations: list/detail/edit/delete with search, status
/// filters and pagination over the repositories.
pub struct AdminService {
    store: Arc<MemoryStore>,
}

impl AdminService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    // ---- Listings ----

    pub async fn list_listings(
        &self,
        query: ListingQuery,
        page: PageRequest,
    ) -> Result<Page<Listing>, AppError> {
        let rows = self.store.list_listings().await.map_err(AppError::repo)?;
        let filtered: Vec<Listing> = rows
            .into_iter()
            .filter(|l| !query.active_only || l.is_active)
            .filter(|l| query.category.map_or(true, |c| l.category == c))
            .filter(|l| match query.search.as_deref() {
                None => true,
                Some(term) => contains_ci(&l.title, term) || contains_ci(&l.location, term),
            })
            .collect();
        Ok(paginate(filtered, page))
    }

    pub async fn get_listing(&self, id: Uuid) -> Result<Listing, AppError> {
        self.store
            .get_listing(id)
            .await
            .map_err(AppError::repo)?
            .ok_or_else(|| AppError::NotFound(format!("listing {}", id)))
    }

    pub async fn save_listing(&self, listing: &Listing) -> Result<(), AppError> {
        self.store.save_listing(listing).await.map_err(AppError::repo)
    }

    /// Soft-hide a listing from the storefront without deleting its record.
    pub async fn deactivate_listing(&self, id: Uuid) -> Result<(), AppError> {
        let mut listing = self.get_listing(id).await?;
        listing.is_active = false;
        self.save_listing(&listing).await
    }

    pub async fn delete_listing(&self, id: Uuid) -> Result<(), AppError> {
        self.get_listing(id).await?;
        self.store.delete_listing(id).await.map_err(AppError::repo)
    }

    // ---- Bookings ----

    pub async fn list_bookings(
        &self,
        query: BookingQuery,
        page: PageRequest,
    ) -> Result<Page<Booking>, AppError> {
        let rows = self.store.list_bookings().await.map_err(AppError::repo)?;
        let filtered: Vec<Booking> = rows
            .into_iter()
            .filter(|b| query.status.as_ref().map_or(true, |s| b.status == *s))
            .filter(|b| match query.search.as_deref() {
                None => true,
                Some(term) => {
                    contains_ci(&b.reference, term) || contains_ci(&b.guest.full_name, term)
                }
            })
            .collect();
        Ok(paginate(filtered, page))
    }

    pub async fn cancel_booking(&self, id: Uuid) -> Result<(), AppError> {
        self.store
            .update_booking_status(id, BookingStatus::Cancelled)
            .await
            .map_err(AppError::repo)
    }

    /// Manual override for a booking stuck in `PENDING_PAYMENT`, e.g. when a
    /// guest paid over the counter instead.
    pub async fn confirm_booking(&self, id: Uuid) -> Result<(), AppError> {
        self.store
            .update_booking_status(id, BookingStatus::Confirmed)
            .await
            .map_err(AppError::repo)
    }

    // ---- Tour requests ----

    pub async fn list_tours(
        &self,
        status: Option<TourStatus>,
        page: PageRequest,
    ) -> Result<Page<TourRequest>, AppError> {
        let rows = self.store.list_tours().await.map_err(AppError::repo)?;
        let filtered: Vec<TourRequest> = rows
            .into_iter()
            .filter(|t| status.as_ref().map_or(true, |s| t.status == *s))
            .collect();
        Ok(paginate(filtered, page))
    }

    pub async fn update_tour_status(&self, id: Uuid, status: TourStatus) -> Result<(), AppError> {
        self.store
            .update_tour_status(id, status)
            .await
            .map_err(AppError::repo)
    }

    // ---- Inquiries ----

    pub async fn list_inquiries(
        &self,
        status: Option<InquiryStatus>,
        page: PageRequest,
    ) -> Result<Page<Inquiry>, AppError> {
        let rows = self.store.list_inquiries().await.map_err(AppError::repo)?;
        let filtered: Vec<Inquiry> = rows
            .into_iter()
            .filter(|i| status.as_ref().map_or(true, |s| i.status == *s))
            .collect();
        Ok(paginate(filtered, page))
    }

    pub async fn mark_inquiry_read(&self, id: Uuid) -> Result<(), AppError> {
        self.store
            .update_inquiry_status(id, InquiryStatus::Read)
            .await
            .map_err(AppError::repo)
    }

    pub async fn archive_inquiry(&self, id: Uuid) -> Result<(), AppError> {
        self.store
            .update_inquiry_status(id, InquiryStatus::Archived)
            .await
            .map_err(AppError::repo)
    }

    // ---- Users ----

    pub async fn list_users(
        &self,
        query: UserQuery,
        page: PageRequest,
    ) -> Result<Page<UserAccount>, AppError> {
        let rows = self.store.list_users().await.map_err(AppError::repo)?;
        let filtered: Vec<UserAccount> = rows
            .into_iter()
            .filter(|u| query.role.as_ref().map_or(true, |r| u.role == *r))
            .filter(|u| match query.search.as_deref() {
                None => true,
                Some(term) => contains_ci(&u.full_name, term) || contains_ci(&u.email, term),
            })
            .collect();
        Ok(paginate(filtered, page))
    }

    pub async fn set_user_active(&self, id: Uuid, is_active: bool) -> Result<(), AppError> {
        self.store
            .set_user_active(id, is_active)
            .await
            .map_err(AppError::repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminService {
        AdminService::new(Arc::new(MemoryStore::with_sample_data()))
    }

    #[tokio::test]
    async fn test_listing_search_and_category_filter() {
        let service = admin();

        let page = service
            .list_listings(
                ListingQuery {
                    search: Some("nairobi".to_string()),
                    ..ListingQuery::default()
                },
                PageRequest::default(),
            )
            .await
            .unwrap();
        assert!(page.total > 0);
        assert!(page.items.iter().all(|l| contains_ci(&l.location, "nairobi")
            || contains_ci(&l.title, "nairobi")));

        let land = service
            .list_listings(
                ListingQuery {
                    category: Some(ListingCategory::Land),
                    ..ListingQuery::default()
                },
                PageRequest::default(),
            )
            .await
            .unwrap();
        assert!(land.items.iter().all(|l| l.category == ListingCategory::Land));
    }

    #[tokio::test]
    async fn test_pagination_boundaries() {
        let service = admin();

        let first = service
            .list_listings(ListingQuery::default(), PageRequest { page: 1, per_page: 5 })
            .await
            .unwrap();
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total_pages(), first.total.div_ceil(5));

        let beyond = service
            .list_listings(ListingQuery::default(), PageRequest { page: 99, per_page: 5 })
            .await
            .unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, first.total);
    }

    #[tokio::test]
    async fn test_deactivate_hides_from_active_only_view() {
        let service = admin();
        let all = service
            .list_listings(ListingQuery::default(), PageRequest { page: 1, per_page: 100 })
            .await
            .unwrap();
        let target = all.items[0].id;

        service.deactivate_listing(target).await.unwrap();

        let active = service
            .list_listings(
                ListingQuery { active_only: true, ..ListingQuery::default() },
                PageRequest { page: 1, per_page: 100 },
            )
            .await
            .unwrap();
        assert!(active.items.iter().all(|l| l.id != target));
        assert_eq!(active.total, all.total - 1);
    }

    #[tokio::test]
    async fn test_user_role_filter() {
        let service = admin();
        let admins = service
            .list_users(
                UserQuery { role: Some(UserRole::Admin), ..UserQuery::default() },
                PageRequest::default(),
            )
            .await
            .unwrap();
        assert!(!admins.items.is_empty());
        assert!(admins.items.iter().all(|u| u.role == UserRole::Admin));
    }

    #[tokio::test]
    async fn test_inquiry_status_workflow() {
        let service = admin();
        let inquiries = service
            .list_inquiries(Some(InquiryStatus::New), PageRequest::default())
            .await
            .unwrap();
        let first = inquiries.items[0].id;

        service.mark_inquiry_read(first).await.unwrap();
        let unread = service
            .list_inquiries(Some(InquiryStatus::New), PageRequest::default())
            .await
            .unwrap();
        assert!(unread.items.iter().all(|i| i.id != first));
    }
}
