mod common;

use common::*;
use yoklama::config::LeadershipRoles;
use yoklama::models::attendance::{self, AttendanceStatus};
use yoklama::models::event::{self, EventRequest};

fn request(name: &str, commissions: Vec<i64>, include_leadership: bool) -> EventRequest {
    EventRequest {
        name: name.to_string(),
        description: Some("Aylık toplantı".to_string()),
        date: Some("2026-03-01T19:00:00".to_string()),
        location: Some("İlçe binası".to_string()),
        mandatory: Some(true),
        include_leadership: Some(include_leadership),
        commissions: Some(commissions),
    }
}

#[tokio::test]
async fn create_links_commissions() {
    let (_dir, pool) = setup_test_db().await;
    let c1 = insert_commission(&pool, "Eğitim").await;
    let c2 = insert_commission(&pool, "Basın").await;

    let event_id = event::create(&pool, &request("Genel Kurul", vec![c1, c2], false), "2026-03-01T19:00:00")
        .await
        .expect("Failed to create event");

    let detail = event::find_detail(&pool, event_id)
        .await
        .expect("Failed to load event")
        .expect("event exists");
    assert_eq!(detail.commissions.len(), 2);
    assert_eq!(detail.date, "2026-03-01T19:00:00");
    assert!(detail.mandatory);
}

#[tokio::test]
async fn update_preserves_attendance_of_remaining_members() {
    let (_dir, pool) = setup_test_db().await;
    let leadership = LeadershipRoles::default();

    let kept = insert_commission(&pool, "Eğitim").await;
    let dropped = insert_commission(&pool, "Basın").await;
    let m_kept = insert_member(&pool, "Ali", "Kaya", None).await;
    let m_dropped = insert_member(&pool, "Banu", "Demir", None).await;
    add_commission_member(&pool, kept, m_kept).await;
    add_commission_member(&pool, dropped, m_dropped).await;

    let event_id = event::create(
        &pool,
        &request("Genel Kurul", vec![kept, dropped], false),
        "2026-03-01T19:00:00",
    )
    .await
    .expect("Failed to create event");

    attendance::set_status(&pool, event_id, m_kept, &AttendanceStatus::Came)
        .await
        .expect("Failed to set status");
    attendance::set_status(&pool, event_id, m_dropped, &AttendanceStatus::Came)
        .await
        .expect("Failed to set status");

    // Drop the second commission: its member leaves the roster, the other
    // member's record must survive the edit.
    let found = event::update(
        &pool,
        event_id,
        &request("Genel Kurul", vec![kept], false),
        &leadership,
    )
    .await
    .expect("Failed to update event");
    assert!(found);

    let remaining = attendance::find_by_event(&pool, event_id)
        .await
        .expect("Failed to load records");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].member_id, m_kept);
    assert_eq!(remaining[0].status, "Geldi");
}

#[tokio::test]
async fn update_keeps_leadership_records_while_included() {
    let (_dir, pool) = setup_test_db().await;
    let leadership = LeadershipRoles::default();

    let chair_role = insert_role(&pool, "İlçe Başkanı", 1).await;
    let leader = insert_member(&pool, "Deniz", "Yılmaz", Some(chair_role)).await;

    let event_id = event::create(
        &pool,
        &request("Genel Kurul", vec![], true),
        "2026-03-01T19:00:00",
    )
    .await
    .expect("Failed to create event");

    attendance::set_status(&pool, event_id, leader, &AttendanceStatus::Came)
        .await
        .expect("Failed to set status");

    // Editing the description only — the leader stays on the roster
    let found = event::update(
        &pool,
        event_id,
        &request("Genel Kurul", vec![], true),
        &leadership,
    )
    .await
    .expect("Failed to update event");
    assert!(found);
    assert_eq!(count_attendance(&pool, event_id).await, 1);

    // Turning leadership inclusion off removes them, and their record
    let found = event::update(
        &pool,
        event_id,
        &request("Genel Kurul", vec![], false),
        &leadership,
    )
    .await
    .expect("Failed to update event");
    assert!(found);
    assert_eq!(count_attendance(&pool, event_id).await, 0);
}

#[tokio::test]
async fn update_of_missing_event_reports_not_found() {
    let (_dir, pool) = setup_test_db().await;
    let leadership = LeadershipRoles::default();
    let found = event::update(&pool, 999, &request("Yok", vec![], false), &leadership)
        .await
        .expect("update runs");
    assert!(!found);
}

#[tokio::test]
async fn update_without_date_keeps_the_stored_date() {
    let (_dir, pool) = setup_test_db().await;
    let leadership = LeadershipRoles::default();

    let event_id = event::create(&pool, &request("Genel Kurul", vec![], false), "2026-03-01T19:00:00")
        .await
        .expect("Failed to create event");

    let mut req = request("Genel Kurul (güncel)", vec![], false);
    req.date = None;
    let found = event::update(&pool, event_id, &req, &leadership)
        .await
        .expect("Failed to update event");
    assert!(found);

    let detail = event::find_detail(&pool, event_id)
        .await
        .expect("Failed to load event")
        .expect("event exists");
    assert_eq!(detail.name, "Genel Kurul (güncel)");
    assert_eq!(detail.date, "2026-03-01T19:00:00");
}

#[tokio::test]
async fn delete_cascades_links_and_records() {
    let (_dir, pool) = setup_test_db().await;

    let commission = insert_commission(&pool, "Eğitim").await;
    let member = insert_member(&pool, "Ali", "Kaya", None).await;
    add_commission_member(&pool, commission, member).await;

    let event_id = event::create(&pool, &request("Genel Kurul", vec![commission], false), "2026-03-01T19:00:00")
        .await
        .expect("Failed to create event");
    attendance::set_status(&pool, event_id, member, &AttendanceStatus::Came)
        .await
        .expect("Failed to set status");

    assert_eq!(
        event::delete(&pool, event_id).await.expect("Failed to delete"),
        1
    );
    assert_eq!(count_attendance(&pool, event_id).await, 0);
    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM event_commissions WHERE event_id = ?1")
        .bind(event_id)
        .fetch_one(&pool)
        .await
        .expect("Failed to count links");
    assert_eq!(links, 0);
}
