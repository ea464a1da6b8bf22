//! Tests del ciclo de vida del viaje: evidencia fotográfica, cancelación
//! y cierre, con el servicio remoto de bookings mockeado.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use common::{ten_day_window, MockBookings};
use rental_booking::models::booking::{
    Booking, BookingStatus, PaymentMethod, PickupOption, TripEvidence,
};
use rental_booking::services::trip_service::TripService;
use rental_booking::utils::errors::AppError;

fn accepted_booking() -> Booking {
    let now = Utc::now();
    Booking {
        id: Uuid::new_v4(),
        customer_phone: "9876543210".to_string(),
        vehicle_id: Uuid::new_v4(),
        package_id: Uuid::new_v4(),
        window: ten_day_window(),
        pickup_option: PickupOption::SelfPickup,
        delivery_address: None,
        payment_method: PaymentMethod::Online,
        coupon_code: None,
        total_amount: Decimal::new(4748, 0),
        status: BookingStatus::BookingAccepted,
        created_at: now,
        updated_at: now,
    }
}

fn four_photos() -> TripEvidence {
    TripEvidence {
        front: Some("front.jpg".to_string()),
        left: Some("left.jpg".to_string()),
        right: Some("right.jpg".to_string()),
        back: Some("back.jpg".to_string()),
    }
}

fn harness_with(booking: Booking) -> (Arc<MockBookings>, TripService, Uuid) {
    let booking_id = booking.id;
    let bookings = Arc::new(MockBookings::new());
    bookings.insert(booking);
    let trips = TripService::new(bookings.clone());
    (bookings, trips, booking_id)
}

#[tokio::test]
async fn start_trip_with_full_evidence() {
    let (bookings, trips, id) = harness_with(accepted_booking());

    let booking = trips.start_trip(id, four_photos()).await.unwrap();

    assert_eq!(booking.status, BookingStatus::StartTrip);
    assert_eq!(bookings.status_of(id), BookingStatus::StartTrip);
    assert_eq!(bookings.start_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn start_trip_rejects_incomplete_evidence() {
    let (bookings, trips, id) = harness_with(accepted_booking());

    let mut evidence = four_photos();
    evidence.back = None;
    evidence.left = None;

    let err = trips.start_trip(id, evidence).await.unwrap_err();
    match err {
        AppError::IncompleteEvidence { missing } => {
            assert_eq!(missing, vec!["left".to_string(), "back".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // La guarda corre antes de la llamada remota: cero efectos
    assert_eq!(bookings.start_calls.load(Ordering::SeqCst), 0);
    assert_eq!(bookings.status_of(id), BookingStatus::BookingAccepted);
}

#[tokio::test]
async fn end_trip_requires_started_trip() {
    let (bookings, trips, id) = harness_with(accepted_booking());

    let err = trips.end_trip(id, four_photos()).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { .. }));
    assert_eq!(bookings.end_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn full_trip_then_finalize() {
    let (bookings, trips, id) = harness_with(accepted_booking());

    trips.start_trip(id, four_photos()).await.unwrap();
    let booking = trips.end_trip(id, four_photos()).await.unwrap();
    assert_eq!(booking.status, BookingStatus::EndTrip);

    let booking = trips.finalize(id).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Completed);
    assert!(booking.status.is_terminal());

    // El cierre se reporta al servicio remoto, que es la fuente de verdad
    assert_eq!(bookings.finalize_calls.load(Ordering::SeqCst), 1);
    assert_eq!(bookings.status_of(id), BookingStatus::Completed);
}

#[tokio::test]
async fn finalize_requires_ended_trip() {
    let (bookings, trips, id) = harness_with(accepted_booking());

    let err = trips.finalize(id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition { .. }));
    assert_eq!(bookings.finalize_calls.load(Ordering::SeqCst), 0);
    assert_eq!(bookings.status_of(id), BookingStatus::BookingAccepted);
}

#[tokio::test]
async fn cancel_before_start_succeeds() {
    let (bookings, trips, id) = harness_with(accepted_booking());

    let booking = trips.cancel(id).await.unwrap();

    assert_eq!(booking.status, BookingStatus::Cancelled);
    assert_eq!(bookings.cancel_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancel_pending_payment_succeeds() {
    let mut pending = accepted_booking();
    pending.status = BookingStatus::PendingPayment;
    let (_, trips, id) = harness_with(pending);

    let booking = trips.cancel(id).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn cancel_after_start_is_rejected() {
    let (bookings, trips, id) = harness_with(accepted_booking());
    trips.start_trip(id, four_photos()).await.unwrap();

    let err = trips.cancel(id).await.unwrap_err();
    match err {
        AppError::InvalidTransition { from, event } => {
            assert_eq!(from, "START_TRIP");
            assert_eq!(event, "cancel");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(bookings.cancel_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn double_start_is_rejected() {
    let (bookings, trips, id) = harness_with(accepted_booking());

    trips.start_trip(id, four_photos()).await.unwrap();
    let err = trips.start_trip(id, four_photos()).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidTransition { .. }));
    // La segunda llamada nunca llega al servicio remoto
    assert_eq!(bookings.start_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unknown_booking_is_not_found() {
    let (_, trips, _) = harness_with(accepted_booking());
    let err = trips.get_booking(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
