//! Mocks en memoria de los colaboradores externos, para los tests de flujo.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use rental_booking::clients::{
    BookingClient, BookingSession, CatalogClient, CouponClient, NewBookingRecord, PaymentClient,
    PaymentOutcome, PaymentProof,
};
use rental_booking::models::booking::{Booking, BookingStatus, TripEvidence};
use rental_booking::models::coupon::{Coupon, CouponKind};
use rental_booking::models::package::{RentalPackage, RentalWindow};
use rental_booking::models::vehicle::Vehicle;
use rental_booking::utils::errors::AppError;

pub fn test_vehicle() -> Vehicle {
    Vehicle {
        id: Uuid::new_v4(),
        name: "Hero Splendor".to_string(),
        model: Some("Splendor Plus".to_string()),
        per_day_rate: Decimal::new(400, 0),
        deposit: Decimal::new(500, 0),
        category_id: Uuid::new_v4(),
        store_id: Uuid::new_v4(),
    }
}

pub fn test_packages(category_id: Uuid) -> Vec<RentalPackage> {
    let package = |days: i64, price: i64| RentalPackage {
        id: Uuid::new_v4(),
        category_id,
        days,
        price: Decimal::new(price, 0),
        active: true,
    };
    vec![package(1, 400), package(7, 2400), package(30, 9000)]
}

pub fn test_coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            code: "SAVE10".to_string(),
            kind: CouponKind::Percentage,
            value: Decimal::new(10, 0),
            active: true,
            expires_at: None,
        },
        Coupon {
            code: "RENT20".to_string(),
            kind: CouponKind::FixedValue,
            value: Decimal::new(5000, 0),
            active: true,
            expires_at: None,
        },
    ]
}

/// Ventana de 10 días justos desde una fecha fija
pub fn ten_day_window() -> RentalWindow {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
    RentalWindow::new(start, start + chrono::Duration::days(10)).unwrap()
}

pub struct MockCatalog {
    pub vehicle: Vehicle,
    pub packages: Vec<RentalPackage>,
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn list_packages(&self, _category_id: Uuid) -> Result<Vec<RentalPackage>, AppError> {
        Ok(self.packages.clone())
    }

    async fn get_vehicle(&self, vehicle_id: Uuid) -> Result<Vehicle, AppError> {
        if vehicle_id == self.vehicle.id {
            Ok(self.vehicle.clone())
        } else {
            Err(AppError::NotFound(format!(
                "Vehicle '{}' not found",
                vehicle_id
            )))
        }
    }
}

pub struct MockCoupons {
    pub coupons: Vec<Coupon>,
}

#[async_trait]
impl CouponClient for MockCoupons {
    async fn list_coupons(&self) -> Result<Vec<Coupon>, AppError> {
        Ok(self.coupons.clone())
    }
}

/// Servicio de bookings en memoria que registra cada llamada
#[derive(Default)]
pub struct MockBookings {
    pub bookings: Mutex<HashMap<Uuid, Booking>>,
    pub created: Mutex<Vec<NewBookingRecord>>,
    pub verified: Mutex<Vec<Uuid>>,
    pub start_calls: AtomicUsize,
    pub end_calls: AtomicUsize,
    pub cancel_calls: AtomicUsize,
    pub finalize_calls: AtomicUsize,
}

impl MockBookings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, booking: Booking) {
        self.bookings.lock().unwrap().insert(booking.id, booking);
    }

    pub fn status_of(&self, booking_id: Uuid) -> BookingStatus {
        self.bookings.lock().unwrap()[&booking_id].status
    }

    fn set_status(&self, booking_id: Uuid, status: BookingStatus) {
        if let Some(b) = self.bookings.lock().unwrap().get_mut(&booking_id) {
            b.status = status;
        }
    }
}

#[async_trait]
impl BookingClient for MockBookings {
    async fn create_booking(&self, record: &NewBookingRecord) -> Result<BookingSession, AppError> {
        let booking_id = Uuid::new_v4();
        let now = Utc::now();
        self.insert(Booking {
            id: booking_id,
            customer_phone: record.customer_phone.clone(),
            vehicle_id: record.vehicle_id,
            package_id: record.package_id,
            window: record.window,
            pickup_option: record.pickup_option,
            delivery_address: record.delivery_address.clone(),
            payment_method: record.payment_method,
            coupon_code: record.coupon_code.clone(),
            total_amount: record.total_amount,
            status: BookingStatus::PendingPayment,
            created_at: now,
            updated_at: now,
        });
        self.created.lock().unwrap().push(record.clone());
        Ok(BookingSession {
            booking_id,
            payment_session_id: format!("sess-{}", booking_id),
            amount_minor: record.amount_minor,
            currency: "INR".to_string(),
        })
    }

    async fn verify_payment(&self, booking_id: Uuid, _proof: &PaymentProof) -> Result<(), AppError> {
        self.verified.lock().unwrap().push(booking_id);
        self.set_status(booking_id, BookingStatus::BookingAccepted);
        Ok(())
    }

    async fn cancel_booking(&self, booking_id: Uuid) -> Result<(), AppError> {
        self.cancel_calls.fetch_add(1, Ordering::SeqCst);
        self.set_status(booking_id, BookingStatus::Cancelled);
        Ok(())
    }

    async fn start_trip(&self, booking_id: Uuid, _evidence: &TripEvidence) -> Result<(), AppError> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        self.set_status(booking_id, BookingStatus::StartTrip);
        Ok(())
    }

    async fn end_trip(&self, booking_id: Uuid, _evidence: &TripEvidence) -> Result<(), AppError> {
        self.end_calls.fetch_add(1, Ordering::SeqCst);
        self.set_status(booking_id, BookingStatus::EndTrip);
        Ok(())
    }

    async fn finalize_booking(&self, booking_id: Uuid) -> Result<(), AppError> {
        self.finalize_calls.fetch_add(1, Ordering::SeqCst);
        self.set_status(booking_id, BookingStatus::Completed);
        Ok(())
    }

    async fn get_booking(&self, booking_id: Uuid) -> Result<Booking, AppError> {
        self.bookings
            .lock()
            .unwrap()
            .get(&booking_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Booking '{}' not found", booking_id)))
    }
}

/// Gateway de pagos con desenlaces programados; sin guion responde pagado
pub struct MockPayments {
    pub scripted: Mutex<VecDeque<Result<PaymentOutcome, AppError>>>,
    pub calls: AtomicUsize,
}

impl MockPayments {
    pub fn always_paid() -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn scripted(outcomes: Vec<PaymentOutcome>) -> Self {
        Self::scripted_results(outcomes.into_iter().map(Ok).collect())
    }

    pub fn scripted_results(outcomes: Vec<Result<PaymentOutcome, AppError>>) -> Self {
        Self {
            scripted: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PaymentClient for MockPayments {
    async fn collect(&self, session: &BookingSession) -> Result<PaymentOutcome, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.scripted.lock().unwrap().pop_front() {
            Some(next) => next,
            None => Ok(PaymentOutcome::Completed(PaymentProof {
                payment_id: format!("pay-{}", session.payment_session_id),
                signature: "sig".to_string(),
            })),
        }
    }
}
