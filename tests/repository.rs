use std::thread::sleep;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;

use terravista::domain::landlord::{NewLandlordProfile, UpdateLandlordProfile};
use terravista::domain::notification::NewNotification;
use terravista::domain::payment::{NewPayment, UpdatePayment};
use terravista::domain::property::{NewProperty, PropertySortBy, UpdateProperty};
use terravista::domain::tour::{NewTour, UpdateTour};
use terravista::domain::types::{
    PaymentPlanType, PaymentStatus, PropertyStatus, SortOrder, TourStatus, VerificationStatus,
};
use terravista::repository::{
    AuditLogListQuery, AuditLogReader, AuditLogWriter, DieselRepository, LandlordListQuery,
    LandlordReader, LandlordWriter, NotificationListQuery, NotificationReader, NotificationWriter,
    PaymentWriter, PropertyListQuery, PropertyReader, PropertyWriter,
    TourListQuery, TourReader, TourWriter, UserListQuery, UserReader,
};

mod common;

fn new_property(owner_id: &str, title: &str, city: &str, price: &str, bedrooms: i32) -> NewProperty {
    NewProperty {
        owner_id: owner_id.into(),
        title: title.into(),
        description: None,
        price: price.into(),
        status: None,
        address: "1 Main St".into(),
        city: city.into(),
        state: "TX".into(),
        zip_code: "73301".into(),
        country: None,
        size: 120,
        bedrooms,
        bathrooms: "2.0".into(),
        features: None,
        images: None,
    }
}

#[test]
fn test_property_repository_crud() {
    let test_db = common::TestDb::new("test_property_repository_crud.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "agent");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_property(&new_property("u1", "Lakeside villa", "Austin", "250000.00", 3))
        .unwrap();
    assert!(!created.id.is_empty());
    // Absent optional fields fall back to the table defaults.
    assert_eq!(created.status, PropertyStatus::Draft);
    assert_eq!(created.country, "USA");

    let fetched = repo.get_property_by_id(&created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    sleep(Duration::from_millis(10));
    let updates = UpdateProperty {
        title: Some("Lakeside villa (renovated)".into()),
        ..Default::default()
    };
    let updated = repo.update_property(&created.id, &updates).unwrap().unwrap();
    assert_eq!(updated.title, "Lakeside villa (renovated)");
    // Only the supplied field changed.
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.city, created.city);
    assert!(updated.updated_at > created.updated_at);

    let deleted = repo.delete_property(&created.id).unwrap().unwrap();
    assert_eq!(deleted.id, created.id);
    assert!(repo.get_property_by_id(&created.id).unwrap().is_none());
    assert!(repo.delete_property(&created.id).unwrap().is_none());
}

#[test]
fn test_property_filters() {
    let test_db = common::TestDb::new("test_property_filters.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "agent");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_property(&new_property("u1", "Downtown loft", "Austin", "300000.00", 1))
        .unwrap();
    repo.create_property(&new_property("u1", "Suburban house", "Austin", "450000.00", 4))
        .unwrap();
    let published = repo
        .create_property(&new_property("u1", "Beach bungalow", "Galveston", "150000.00", 2))
        .unwrap();
    repo.update_property(
        &published.id,
        &UpdateProperty {
            status: Some(PropertyStatus::Published),
            ..Default::default()
        },
    )
    .unwrap();

    let (total, items) = repo
        .list_properties(PropertyListQuery::new().city("Austin"))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);

    let (total, items) = repo
        .list_properties(PropertyListQuery::new().status(PropertyStatus::Published))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, published.id);

    // Price bounds compare numerically despite the TEXT storage.
    let (total, _) = repo
        .list_properties(PropertyListQuery::new().price_range(Some(200_000.0), Some(400_000.0)))
        .unwrap();
    assert_eq!(total, 1);

    let (total, _) = repo
        .list_properties(PropertyListQuery::new().bedrooms(2))
        .unwrap();
    assert_eq!(total, 2);

    let (total, items) = repo
        .list_properties(PropertyListQuery::new().search("bungalow"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].title, "Beach bungalow");
}

#[test]
fn test_property_pagination_walk() {
    let test_db = common::TestDb::new("test_property_pagination_walk.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "agent");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 0..5 {
        repo.create_property(&new_property(
            "u1",
            &format!("Listing {i}"),
            "Austin",
            "100000.00",
            2,
        ))
        .unwrap();
    }

    let mut seen = Vec::new();
    for offset in [0, 2, 4] {
        let (total, items) = repo
            .list_properties(PropertyListQuery::new().paginate(terravista::pagination::Page {
                limit: 2,
                offset,
            }))
            .unwrap();
        // The total is independent of the window.
        assert_eq!(total, 5);
        assert!(items.len() <= 2);
        seen.extend(items.into_iter().map(|p| p.id));
    }

    // Stepping the offset by the limit covers the set without duplicates.
    assert_eq!(seen.len(), 5);
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 5);
}

#[test]
fn test_pagination_walk_is_stable_under_tied_sort_keys() {
    let test_db = common::TestDb::new("test_pagination_tied_sort_keys.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "agent");
    let repo = DieselRepository::new(test_db.pool().clone());

    // Every row ties on the sort column; only the id tiebreaker keeps the
    // walk from repeating or skipping rows.
    for i in 0..5 {
        repo.create_property(&new_property(
            "u1",
            &format!("Listing {i}"),
            "Austin",
            "100000.00",
            2,
        ))
        .unwrap();
    }

    let mut seen = Vec::new();
    for offset in [0, 2, 4] {
        let (total, items) = repo
            .list_properties(
                PropertyListQuery::new()
                    .sort(PropertySortBy::Bedrooms, SortOrder::Desc)
                    .paginate(terravista::pagination::Page { limit: 2, offset }),
            )
            .unwrap();
        assert_eq!(total, 5);
        seen.extend(items.into_iter().map(|p| p.id));
    }

    assert_eq!(seen.len(), 5);
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 5);
}

#[test]
fn test_landlord_repository_crud_and_filters() {
    let test_db = common::TestDb::new("test_landlord_repository.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "landlord");
    common::seed_user(test_db.pool(), "u2", "Bob", "bob@example.com", "landlord");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo
        .create_landlord(&NewLandlordProfile {
            user_id: "u1".into(),
            bio: Some("Ten years of rentals".into()),
            verification_documents: None,
        })
        .unwrap();
    assert_eq!(alice.verification_status, VerificationStatus::Pending);
    assert_eq!(alice.rating, "0.00");

    let bob = repo
        .create_landlord(&NewLandlordProfile {
            user_id: "u2".into(),
            bio: None,
            verification_documents: Some(vec!["passport.pdf".into()]),
        })
        .unwrap();

    repo.update_landlord(
        &bob.id,
        &UpdateLandlordProfile {
            verification_status: Some(VerificationStatus::Verified),
            rating: Some("4.50".into()),
            ..Default::default()
        },
    )
    .unwrap();

    let (total, items) = repo
        .list_landlords(LandlordListQuery::new().verification_status(VerificationStatus::Verified))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].user_id, "u2");
    assert_eq!(items[0].verification_documents, Some(vec!["passport.pdf".to_string()]));

    let (total, items) = repo
        .list_landlords(LandlordListQuery::new().min_rating(4.0))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].rating, "4.50");

    let (total, _) = repo
        .list_landlords(LandlordListQuery::new().user_id("u1"))
        .unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_tour_repository_crud_and_filters() {
    let test_db = common::TestDb::new("test_tour_repository.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "agent");
    common::seed_user(test_db.pool(), "u2", "Bob", "bob@example.com", "buyer");
    let repo = DieselRepository::new(test_db.pool().clone());

    let property = repo
        .create_property(&new_property("u1", "Tourable flat", "Austin", "200000.00", 2))
        .unwrap();

    let date = Utc::now().naive_utc();
    let tour = repo
        .create_tour(&NewTour {
            property_id: property.id.clone(),
            buyer_id: "u2".into(),
            agent_id: None,
            date,
            notes: None,
        })
        .unwrap();
    assert_eq!(tour.status, TourStatus::Pending);

    let confirmed = repo
        .update_tour(
            &tour.id,
            &UpdateTour {
                status: Some(TourStatus::Confirmed),
                agent_id: Some("u1".into()),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(confirmed.status, TourStatus::Confirmed);
    assert_eq!(confirmed.agent_id.as_deref(), Some("u1"));
    assert_eq!(confirmed.date, tour.date);

    let (total, _) = repo
        .list_tours(TourListQuery::new().status(TourStatus::Confirmed))
        .unwrap();
    assert_eq!(total, 1);

    let (total, _) = repo
        .list_tours(TourListQuery::new().property_id(property.id.as_str()))
        .unwrap();
    assert_eq!(total, 1);

    let (total, _) = repo
        .list_tours(TourListQuery::new().date_range(
            Some(date - chrono::Duration::hours(1)),
            Some(date + chrono::Duration::hours(1)),
        ))
        .unwrap();
    assert_eq!(total, 1);

    let (total, _) = repo
        .list_tours(TourListQuery::new().date_range(Some(date + chrono::Duration::hours(1)), None))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_payment_repository_defaults_and_update() {
    let test_db = common::TestDb::new("test_payment_repository.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "buyer");
    let repo = DieselRepository::new(test_db.pool().clone());

    let payment = repo
        .create_payment(&NewPayment {
            user_id: "u1".into(),
            property_id: None,
            amount: "1500.00".into(),
            currency: None,
            plan_type: None,
            installments_total: None,
            installment_number: None,
            gateway: "midtrans".into(),
            gateway_transaction_id: None,
            metadata: Some(json!({"channel": "va"})),
        })
        .unwrap();
    assert_eq!(payment.currency, "IDR");
    assert_eq!(payment.plan_type, PaymentPlanType::FullPayment);
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.metadata, Some(json!({"channel": "va"})));

    // Patching the status leaves the amount untouched.
    let completed = repo
        .update_payment(
            &payment.id,
            &UpdatePayment {
                status: Some(PaymentStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, PaymentStatus::Completed);
    assert_eq!(completed.amount, "1500.00");
    assert_eq!(completed.gateway, "midtrans");
}

#[test]
fn test_notification_repository_read_flag() {
    let test_db = common::TestDb::new("test_notification_repository.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "buyer");
    let repo = DieselRepository::new(test_db.pool().clone());

    let notification = repo
        .create_notification(&NewNotification {
            user_id: "u1".into(),
            kind: "tour_confirmed".into(),
            title: "Your tour is confirmed".into(),
            message: "See you Saturday".into(),
            data: None,
        })
        .unwrap();
    assert!(!notification.read);

    let read = repo
        .set_notification_read(&notification.id, true)
        .unwrap()
        .unwrap();
    assert!(read.read);

    let (total, _) = repo
        .list_notifications(NotificationListQuery::new().read(false))
        .unwrap();
    assert_eq!(total, 0);
    let (total, items) = repo
        .list_notifications(NotificationListQuery::new().kind("tour_confirmed").read(true))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, notification.id);

    assert!(repo.set_notification_read("missing", true).unwrap().is_none());
}

#[test]
fn test_audit_log_repository_is_append_only() {
    let test_db = common::TestDb::new("test_audit_log_repository.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    // user_id is None: a system-generated event, no user row required.
    let entry = repo
        .create_audit_log(&terravista::domain::audit_log::NewAuditLog {
            user_id: None,
            action: "property.publish".into(),
            entity_type: Some("property".into()),
            entity_id: Some("p1".into()),
            details: Some(json!({"from": "draft", "to": "published"})),
            ip_address: Some("127.0.0.1".into()),
            user_agent: None,
        })
        .unwrap();

    let fetched = repo.get_audit_log_by_id(&entry.id).unwrap().unwrap();
    assert_eq!(fetched, entry);

    let (total, items) = repo
        .list_audit_logs(AuditLogListQuery::new().entity("property", "p1"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].action, "property.publish");

    let (total, _) = repo
        .list_audit_logs(AuditLogListQuery::new().action("property.delete"))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_user_repository_is_read_only_directory() {
    let test_db = common::TestDb::new("test_user_repository.db");
    common::seed_user(test_db.pool(), "u1", "Alice", "alice@example.com", "agent");
    common::seed_user(test_db.pool(), "u2", "Bob", "bob@example.com", "buyer");
    common::seed_user(test_db.pool(), "u3", "Carol", "carol@example.com", "buyer");
    let repo = DieselRepository::new(test_db.pool().clone());

    // Default directory order is ascending by name.
    let (total, items) = repo.list_users(UserListQuery::new()).unwrap();
    assert_eq!(total, 3);
    let names: Vec<_> = items.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);

    let (total, items) = repo.list_users(UserListQuery::new().role("buyer")).unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|u| u.role == "buyer"));

    let (total, items) = repo.list_users(UserListQuery::new().search("caro")).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, "u3");

    assert!(repo.get_user_by_id("missing").unwrap().is_none());
}
