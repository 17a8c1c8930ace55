mod common;

use common::*;
use yoklama::config::LeadershipRoles;
use yoklama::models::attendance::roster;

#[tokio::test]
async fn roster_contains_commission_members_only() {
    let (_dir, pool) = setup_test_db().await;
    let leadership = LeadershipRoles::default();

    let commission = insert_commission(&pool, "Eğitim").await;
    let m1 = insert_member(&pool, "Ali", "Kaya", None).await;
    let m2 = insert_member(&pool, "Banu", "Demir", None).await;
    let m3 = insert_member(&pool, "Cem", "Arslan", None).await;
    for m in [m1, m2, m3] {
        add_commission_member(&pool, commission, m).await;
    }
    // A district leader outside the commission, not invited
    let chair_role = insert_role(&pool, "İlçe Başkanı", 1).await;
    insert_member(&pool, "Deniz", "Yılmaz", Some(chair_role)).await;

    let event = insert_event(&pool, "Genel Kurul", "2026-03-01T19:00:00", true, false).await;
    link_event_commission(&pool, event, commission).await;

    let members = roster::resolve(&pool, event, false, &leadership)
        .await
        .expect("Failed to resolve roster");
    assert_eq!(members.len(), 3);
    assert!(members.iter().all(|m| [m1, m2, m3].contains(&m.id)));
}

#[tokio::test]
async fn leadership_inclusion_unions_without_duplicates() {
    let (_dir, pool) = setup_test_db().await;
    let leadership = LeadershipRoles::default();

    let chair_role = insert_role(&pool, "İlçe Başkanı", 1).await;
    let board_role = insert_role(&pool, "Yönetim Kurulu", 2).await;

    let commission = insert_commission(&pool, "Eğitim").await;
    // Two of the three commission members are also district leaders
    let m1 = insert_member(&pool, "Ali", "Kaya", Some(chair_role)).await;
    let m2 = insert_member(&pool, "Banu", "Demir", Some(board_role)).await;
    let m3 = insert_member(&pool, "Cem", "Arslan", None).await;
    for m in [m1, m2, m3] {
        add_commission_member(&pool, commission, m).await;
    }
    // A leader outside the commission — joins via leadership inclusion
    let m4 = insert_member(&pool, "Deniz", "Yılmaz", Some(board_role)).await;
    // A non-leader outside the commission — never invited
    insert_member(&pool, "Emre", "Çetin", None).await;

    let event = insert_event(&pool, "Genel Kurul", "2026-03-01T19:00:00", true, true).await;
    link_event_commission(&pool, event, commission).await;

    let members = roster::resolve(&pool, event, true, &leadership)
        .await
        .expect("Failed to resolve roster");
    assert_eq!(members.len(), 4);
    let ids: Vec<i64> = members.iter().map(|m| m.id).collect();
    for expected in [m1, m2, m3, m4] {
        assert!(ids.contains(&expected));
    }
}

#[tokio::test]
async fn event_without_commissions_or_leadership_has_empty_roster() {
    let (_dir, pool) = setup_test_db().await;
    let leadership = LeadershipRoles::default();

    insert_member(&pool, "Ali", "Kaya", None).await;
    let event = insert_event(&pool, "Bayramlaşma", "2026-04-01T11:00:00", false, false).await;

    let members = roster::resolve(&pool, event, false, &leadership)
        .await
        .expect("Failed to resolve roster");
    assert!(members.is_empty());
}

#[tokio::test]
async fn leadership_set_is_configurable() {
    let (_dir, pool) = setup_test_db().await;

    let custom_role = insert_role(&pool, "Gençlik Kolları", 9).await;
    let m1 = insert_member(&pool, "Ali", "Kaya", Some(custom_role)).await;
    let chair_role = insert_role(&pool, "İlçe Başkanı", 1).await;
    insert_member(&pool, "Banu", "Demir", Some(chair_role)).await;

    let event = insert_event(&pool, "Gençlik Şöleni", "2026-05-01T13:00:00", false, true).await;

    let leadership = LeadershipRoles(vec!["Gençlik Kolları".to_string()]);
    let members = roster::resolve(&pool, event, true, &leadership)
        .await
        .expect("Failed to resolve roster");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, m1);
}

#[tokio::test]
async fn roster_orders_names_with_turkish_collation() {
    let (_dir, pool) = setup_test_db().await;
    let leadership = LeadershipRoles::default();

    let commission = insert_commission(&pool, "Eğitim").await;
    for (first, last) in [
        ("Çiğdem", "Öz"),
        ("Cem", "Öz"),
        ("Ümit", "Uzun"),
        ("Ufuk", "Uzun"),
        ("İnci", "Ak"),
        ("Irmak", "Ak"),
    ] {
        let m = insert_member(&pool, first, last, None).await;
        add_commission_member(&pool, commission, m).await;
    }

    let event = insert_event(&pool, "Genel Kurul", "2026-03-01T19:00:00", true, false).await;
    link_event_commission(&pool, event, commission).await;

    let members = roster::resolve(&pool, event, false, &leadership)
        .await
        .expect("Failed to resolve roster");
    let names: Vec<String> = members.iter().map(|m| m.full_name()).collect();
    assert_eq!(
        names,
        vec![
            "Cem Öz",
            "Çiğdem Öz",
            "Irmak Ak",
            "İnci Ak",
            "Ufuk Uzun",
            "Ümit Uzun",
        ]
    );
}

#[tokio::test]
async fn roster_members_carry_full_detail() {
    let (_dir, pool) = setup_test_db().await;
    let leadership = LeadershipRoles::default();

    let chair_role = insert_role(&pool, "İlçe Başkanı", 1).await;
    let commission = insert_commission(&pool, "Eğitim").await;
    let member = insert_member(&pool, "Ali", "Kaya", Some(chair_role)).await;
    add_commission_member(&pool, commission, member).await;

    let neighborhood_id: i64 = sqlx::query("INSERT INTO neighborhoods (name) VALUES ('Cumhuriyet')")
        .execute(&pool)
        .await
        .expect("Failed to insert neighborhood")
        .last_insert_rowid();
    sqlx::query("INSERT INTO member_neighborhoods (member_id, neighborhood_id) VALUES (?1, ?2)")
        .bind(member)
        .bind(neighborhood_id)
        .execute(&pool)
        .await
        .expect("Failed to link neighborhood");

    let event = insert_event(&pool, "Genel Kurul", "2026-03-01T19:00:00", true, false).await;
    link_event_commission(&pool, event, commission).await;

    let members = roster::resolve(&pool, event, false, &leadership)
        .await
        .expect("Failed to resolve roster");
    assert_eq!(members.len(), 1);
    let detail = &members[0];
    assert_eq!(
        detail.district_role.as_ref().map(|r| r.name.as_str()),
        Some("İlçe Başkanı")
    );
    assert_eq!(detail.commissions.len(), 1);
    assert_eq!(detail.commissions[0].commission_name, "Eğitim");
    assert_eq!(detail.neighborhoods.len(), 1);
    assert_eq!(detail.neighborhoods[0].neighborhood_name, "Cumhuriyet");
}
