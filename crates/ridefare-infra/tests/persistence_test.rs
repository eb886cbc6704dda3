//! Integration tests for the JSON file repositories

use chrono::{Duration, Utc};
use tempfile::tempdir;

use ridefare_domain::repository::{AdminSummaryRepository, BookingRepository, UserRepository};
use ridefare_infra::persistence::{
    FileAdminSummaryRepository, FileBookingRepository, FileUserRepository,
};
use ridefare_types::{
    AdminGrant, AdminSummary, Booking, BookingStatus, Error, FareBreakdown, Money, StoreError,
    User,
};

fn booking(id: &str, user_id: &str, age_minutes: i64) -> Booking {
    Booking {
        id: id.to_string(),
        user_id: user_id.to_string(),
        city: "Ahmedabad".to_string(),
        origin: "Paldi".to_string(),
        destination: "Kankaria".to_string(),
        vehicle_type: "car".to_string(),
        status: BookingStatus::Pending,
        created_at: Utc::now() - Duration::minutes(age_minutes),
        confirmed_at: None,
        cancelled_at: None,
        selected_route: None,
        pricing: None,
    }
}

fn user(id: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        name: "Asha".to_string(),
        email: email.to_string(),
        phone: None,
        state: "Gujarat".to_string(),
        city: "Ahmedabad".to_string(),
        is_admin: false,
        created_at: Utc::now(),
    }
}

#[test]
fn test_bookings_survive_reopen() {
    let dir = tempdir().unwrap();
    {
        let repo = FileBookingRepository::open(dir.path().to_path_buf()).unwrap();
        repo.save(&booking("old", "u1", 30)).unwrap();
        repo.save(&booking("new", "u1", 1)).unwrap();
        repo.save(&booking("other", "u2", 10)).unwrap();
    }
    assert!(dir.path().join("bookings.json").exists());

    let repo = FileBookingRepository::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(repo.len(), 3);

    let ids: Vec<_> = repo.find_all().unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["new", "other", "old"]);

    let mine: Vec<_> = repo.find_by_user("u1").unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(mine, vec!["new", "old"]);
    assert!(repo.find_by_id("missing").unwrap().is_none());
}

#[test]
fn test_booking_save_replaces() {
    let dir = tempdir().unwrap();
    let repo = FileBookingRepository::open(dir.path().to_path_buf()).unwrap();
    let mut b = booking("b1", "u1", 0);
    repo.save(&b).unwrap();
    b.status = BookingStatus::Cancelled;
    repo.save(&b).unwrap();

    assert_eq!(repo.len(), 1);
    let stored = repo.find_by_id("b1").unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);
}

#[test]
fn test_corrupted_store_is_reported() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("bookings.json"), "{ not json").unwrap();
    let err = FileBookingRepository::open(dir.path().to_path_buf())
        .err()
        .unwrap();
    assert!(matches!(err, Error::Store(StoreError::Corrupted(_))));
}

#[test]
fn test_users_and_admins() {
    let dir = tempdir().unwrap();
    let repo = FileUserRepository::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(repo.admin_count().unwrap(), 0);

    repo.save(&user("u1", "asha@example.com")).unwrap();
    let grant = AdminGrant {
        user_id: "u1".to_string(),
        email: "asha@example.com".to_string(),
        name: "Asha".to_string(),
        granted_at: Utc::now(),
        is_super_admin: true,
    };
    repo.save_admin(&grant).unwrap();
    repo.save_admin(&grant).unwrap();

    let reopened = FileUserRepository::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(reopened.admin_count().unwrap(), 1);
    assert!(reopened
        .find_by_email("ASHA@example.com")
        .unwrap()
        .is_some());
    assert_eq!(reopened.find_all().unwrap().len(), 1);
}

#[test]
fn test_admin_summary_roundtrip() {
    let dir = tempdir().unwrap();
    let repo = FileAdminSummaryRepository::open(dir.path().to_path_buf()).unwrap();
    assert_eq!(repo.load().unwrap(), AdminSummary::default());

    let final_fare = Money::from_minor(21120);
    let (driver_earnings, company_profit) = final_fare.split(0.75);
    let fare = FareBreakdown {
        base_cost: Money::from_minor(16000),
        weather_multiplier: 1.2,
        traffic_multiplier: 1.1,
        weather_adjusted_cost: Money::from_minor(19200),
        traffic_adjusted_cost: final_fare,
        final_fare,
        driver_earnings,
        company_profit,
    };
    let mut summary = AdminSummary::default();
    summary.record("Paldi_to_Kankaria", &fare);
    repo.store(&summary).unwrap();

    let loaded = repo.load().unwrap();
    assert_eq!(loaded.total_bookings, 1);
    assert_eq!(loaded.total_revenue.minor(), 21120);
    assert_eq!(loaded.total_company_profit.minor(), 5280);
    assert_eq!(loaded.route_statistics["Paldi_to_Kankaria"].total_bookings, 1);
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_write_is_reported() {
    let dir = tempdir().unwrap();
    std::os::unix::fs::symlink("/dev/full", dir.path().join("admin.json")).unwrap();
    let repo = FileAdminSummaryRepository::open(dir.path().to_path_buf()).unwrap();

    let err = repo.store(&AdminSummary::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
