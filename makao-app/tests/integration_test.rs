use chrono::NaiveDate;
use makao_app::admin::{BookingQuery, PageRequest};
use makao_app::{bootstrap_with, AppContext, ToastLevel};
use makao_booking::booking::BookingStatus;
use makao_booking::repository::BookingRepository;
use makao_booking::reservation::{PaymentPhase, ReservationStep};
use makao_catalog::repository::ListingRepository;
use makao_catalog::ListingCategory;
use makao_core::payment::PaymentOutcome;
use makao_search::FilterAction;
use makao_store::Config;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn context(success_rate: f64) -> AppContext {
    let mut config = Config::default();
    config.payment.success_rate = success_rate;
    bootstrap_with(config).expect("bootstrap")
}

async fn first_short_stay(ctx: &AppContext) -> Uuid {
    let storefront = ctx.storefront().await.unwrap();
    storefront
        .visible_listings()
        .iter()
        .find(|l| l.category == ListingCategory::ShortStay)
        .map(|l| l.id)
        .expect("seeded short stay")
}

#[tokio::test(start_paused = true)]
async fn test_booking_happy_path() {
    let ctx = context(1.0);
    let listing_id = first_short_stay(&ctx).await;

    let mut toasts = ctx.toasts.subscribe();
    let mut session = ctx.open_reservation(listing_id).await.unwrap();

    session.set_guests(2);
    session
        .submit_dates(Some(date(2025, 6, 10)), Some(date(2025, 6, 13)))
        .unwrap();
    assert_eq!(session.flow().step(), ReservationStep::Contact);

    session
        .submit_contact("Jane Wanjiku", "jane@example.com", "0712345678")
        .unwrap();

    session.pay().unwrap();
    let push_toast = toasts.recv().await.unwrap();
    assert_eq!(push_toast.level, ToastLevel::Info);
    assert!(push_toast.message.contains("sent to your phone"));

    let outcome = session.await_payment().await.unwrap();
    assert!(outcome.is_success());
    assert_eq!(session.flow().step(), ReservationStep::Confirmation);

    let bookings = ctx.store.list_bookings().await.unwrap();
    assert_eq!(bookings.len(), 1);
    let booking = &bookings[0];
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.nights, 3);
    assert_eq!(booking.guests, 2);
    assert!(booking.reference.starts_with("MKO-"));
    assert_eq!(booking.reference.len(), "MKO-".len() + 8);
    assert!(booking.mpesa_receipt.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_failed_payment_keeps_dialog_on_payment_step() {
    let ctx = context(0.0);
    let listing_id = first_short_stay(&ctx).await;

    let mut session = ctx.open_reservation(listing_id).await.unwrap();
    session
        .submit_dates(Some(date(2025, 7, 1)), Some(date(2025, 7, 4)))
        .unwrap();
    session
        .submit_contact("Brian Otieno", "brian@example.com", "254722334455")
        .unwrap();

    session.pay().unwrap();
    let outcome = session.await_payment().await.unwrap();
    assert!(matches!(outcome, PaymentOutcome::Failed { .. }));
    assert_eq!(session.flow().step(), ReservationStep::Payment);
    assert_eq!(session.flow().payment_phase(), PaymentPhase::Failed);

    // Retry is allowed from the failed state.
    session.pay().unwrap();
    assert_eq!(session.flow().payment_phase(), PaymentPhase::Processing);
    session.await_payment().await.unwrap();

    assert!(ctx.store.list_bookings().await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_closing_dialog_aborts_pending_push() {
    let ctx = context(1.0);
    let listing_id = first_short_stay(&ctx).await;

    let mut session = ctx.open_reservation(listing_id).await.unwrap();
    session
        .submit_dates(Some(date(2025, 8, 1)), Some(date(2025, 8, 3)))
        .unwrap();
    session
        .submit_contact("Jane Wanjiku", "jane@example.com", "0712345678")
        .unwrap();
    session.pay().unwrap();

    session.close();
    assert_eq!(session.flow().step(), ReservationStep::Dates);
    assert!(session.await_payment().await.is_err());
    assert!(ctx.store.list_bookings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_phone_blocks_payment_step() {
    let ctx = context(1.0);
    let listing_id = first_short_stay(&ctx).await;

    let mut toasts = ctx.toasts.subscribe();
    let mut session = ctx.open_reservation(listing_id).await.unwrap();
    session
        .submit_dates(Some(date(2025, 6, 10)), Some(date(2025, 6, 13)))
        .unwrap();

    assert!(session
        .submit_contact("Jane Wanjiku", "jane@example.com", "12345")
        .is_err());
    assert_eq!(session.flow().step(), ReservationStep::Contact);

    let toast = toasts.recv().await.unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
}

#[tokio::test]
async fn test_storefront_filter_flow() {
    let ctx = context(1.0);
    let mut storefront = ctx.storefront().await.unwrap();

    storefront.dispatch(FilterAction::ToggleCategory { category: ListingCategory::ShortStay });
    storefront.dispatch(FilterAction::SetPriceRange { min: 0, max: 5000 });
    storefront.dispatch(FilterAction::SetGuests { guests: 2 });

    let affordable: Vec<_> = storefront.visible_listings();
    assert!(!affordable.is_empty());
    assert!(affordable.iter().all(|l| l.price_ksh <= 5000));

    // Nobody in the seed sleeps five guests under KSh 5,000.
    storefront.dispatch(FilterAction::SetGuests { guests: 5 });
    assert!(storefront.visible_listings().is_empty());

    storefront.dispatch(FilterAction::ClearFilters);
    ctx.publish_search(storefront.criteria(), storefront.visible_ids().len());
}

#[tokio::test(start_paused = true)]
async fn test_admin_sees_and_cancels_booking() {
    let ctx = context(1.0);
    let listing_id = first_short_stay(&ctx).await;

    let mut session = ctx.open_reservation(listing_id).await.unwrap();
    session
        .submit_dates(Some(date(2025, 9, 5)), Some(date(2025, 9, 8)))
        .unwrap();
    session
        .submit_contact("Grace Njeri", "grace@example.com", "0733445566")
        .unwrap();
    session.pay().unwrap();
    session.await_payment().await.unwrap();

    let admin = ctx.admin();
    let confirmed = admin
        .list_bookings(
            BookingQuery {
                status: Some(BookingStatus::Confirmed),
                ..BookingQuery::default()
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(confirmed.total, 1);

    let booking_id = confirmed.items[0].id;
    admin.cancel_booking(booking_id).await.unwrap();

    let cancelled = admin
        .list_bookings(
            BookingQuery {
                status: Some(BookingStatus::Cancelled),
                ..BookingQuery::default()
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(cancelled.total, 1);
}

#[tokio::test]
async fn test_tour_request_and_admin_confirmation() {
    let ctx = context(1.0);
    let land_id = ctx
        .store
        .list_listings()
        .await
        .unwrap()
        .iter()
        .find(|l| l.category == ListingCategory::Land)
        .map(|l| l.id)
        .expect("seeded land listing");

    let tour = ctx
        .request_tour(land_id, "Daniel Mwangi", "0700112233", date(2025, 7, 5), None)
        .await
        .unwrap();

    let admin = ctx.admin();
    admin
        .update_tour_status(tour.id, makao_booking::tour::TourStatus::Confirmed)
        .await
        .unwrap();

    let confirmed = admin
        .list_tours(Some(makao_booking::tour::TourStatus::Confirmed), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(confirmed.total, 1);
}

#[tokio::test]
async fn test_non_short_stay_listing_is_not_bookable() {
    let ctx = context(1.0);
    let sale_id = ctx
        .store
        .list_listings()
        .await
        .unwrap()
        .iter()
        .find(|l| l.category == ListingCategory::Sale)
        .map(|l| l.id)
        .expect("seeded sale listing");

    assert!(ctx.open_reservation(sale_id).await.is_err());
}

#[tokio::test]
async fn test_whatsapp_link_uses_configured_line() {
    let ctx = context(1.0);
    let link = ctx.whatsapp_link_for(None);
    assert!(link.starts_with("https://wa.me/254700123456?text="));
}

#[tokio::test]
async fn test_inquiry_reaches_admin_inbox() {
    let ctx = context(1.0);
    let before = ctx
        .admin()
        .list_inquiries(None, PageRequest::default())
        .await
        .unwrap()
        .total;

    ctx.submit_inquiry(
        None,
        "Faith Chebet",
        "faith.chebet@example.com",
        "Do you list anything in Nakuru town?",
    )
    .await
    .unwrap();

    let after = ctx
        .admin()
        .list_inquiries(None, PageRequest::default())
        .await
        .unwrap()
        .total;
    assert_eq!(after, before + 1);
}

#[tokio::test]
async fn test_theme_toggle_and_shutdown() {
    let ctx = context(1.0);
    assert_eq!(ctx.theme(), makao_app::Theme::Light);
    assert_eq!(ctx.toggle_theme(), makao_app::Theme::Dark);
    assert_eq!(ctx.toggle_theme(), makao_app::Theme::Light);
    ctx.shutdown();
}
