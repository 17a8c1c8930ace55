mod common;

use common::*;
use yoklama::models::attendance::{self, AttendanceStatus};
use yoklama::models::commission::{self, CommissionRequest};

#[tokio::test]
async fn add_member_upserts_the_duty() {
    let (_dir, pool) = setup_test_db().await;

    let commission_id = insert_commission(&pool, "Eğitim").await;
    let member_id = insert_member(&pool, "Ali", "Kaya", None).await;

    let first = commission::add_member(&pool, commission_id, member_id, "Sekreter")
        .await
        .expect("Failed to add member");
    assert_eq!(first.duty, "Sekreter");

    // Adding the same member again updates the duty instead of duplicating
    let second = commission::add_member(&pool, commission_id, member_id, "Başkan")
        .await
        .expect("Failed to re-add member");
    assert_eq!(second.id, first.id);
    assert_eq!(second.duty, "Başkan");

    let members = commission::find_members(&pool, commission_id)
        .await
        .expect("Failed to list members");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].duty, "Başkan");
}

#[tokio::test]
async fn remove_member_deletes_the_membership() {
    let (_dir, pool) = setup_test_db().await;

    let commission_id = insert_commission(&pool, "Eğitim").await;
    let member_id = insert_member(&pool, "Ali", "Kaya", None).await;
    let membership = commission::add_member(&pool, commission_id, member_id, "")
        .await
        .expect("Failed to add member");

    assert_eq!(
        commission::remove_member(&pool, membership.id)
            .await
            .expect("Failed to remove"),
        1
    );
    assert!(commission::find_members(&pool, commission_id)
        .await
        .expect("Failed to list members")
        .is_empty());
}

#[tokio::test]
async fn list_counts_members() {
    let (_dir, pool) = setup_test_db().await;

    let c1 = insert_commission(&pool, "Eğitim").await;
    insert_commission(&pool, "Basın").await;
    for i in 0..3 {
        let m = insert_member(&pool, &format!("Üye{i}"), "Test", None).await;
        add_commission_member(&pool, c1, m).await;
    }

    let commissions = commission::find_all(&pool).await.expect("Failed to list");
    assert_eq!(commissions.len(), 2);
    let education = commissions
        .iter()
        .find(|c| c.name == "Eğitim")
        .expect("commission listed");
    assert_eq!(education.member_count, 3);
}

#[tokio::test]
async fn detail_events_report_turnout() {
    let (_dir, pool) = setup_test_db().await;

    let commission_id = insert_commission(&pool, "Eğitim").await;
    let m1 = insert_member(&pool, "Ali", "Kaya", None).await;
    let m2 = insert_member(&pool, "Banu", "Demir", None).await;
    add_commission_member(&pool, commission_id, m1).await;
    add_commission_member(&pool, commission_id, m2).await;

    let event = insert_event(&pool, "Genel Kurul", "2026-03-01T19:00:00", true, false).await;
    link_event_commission(&pool, event, commission_id).await;
    attendance::set_status(&pool, event, m1, &AttendanceStatus::Came)
        .await
        .expect("set");
    attendance::set_status(&pool, event, m2, &AttendanceStatus::Absent)
        .await
        .expect("set");

    let events = commission::find_events(&pool, commission_id)
        .await
        .expect("Failed to list events");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].came_count, 1);
}

#[tokio::test]
async fn update_renames_the_commission() {
    let (_dir, pool) = setup_test_db().await;

    let id = commission::create(
        &pool,
        &CommissionRequest {
            name: "Eğitim".to_string(),
            description: None,
        },
    )
    .await
    .expect("Failed to create");

    let found = commission::update(
        &pool,
        id,
        &CommissionRequest {
            name: "Eğitim ve Kültür".to_string(),
            description: Some("Eğitim çalışmaları".to_string()),
        },
    )
    .await
    .expect("Failed to update");
    assert!(found);

    let row = commission::find_by_id(&pool, id)
        .await
        .expect("load")
        .expect("exists");
    assert_eq!(row.name, "Eğitim ve Kültür");
    assert_eq!(row.description, "Eğitim çalışmaları");
}
