//! Integration tests for the registration data layer.
//!
//! Exercises the repositories against a real database:
//! - Open-event listing with the organization join and deadline filter
//! - Event configuration retrieval with typed catalogs
//! - Email-keyed dancer upsert idempotence
//! - Partnership insert and the cartesian registration inserts

use chrono::{Duration, Utc};
use promenade_core::selection::{DanceKey, SelectionState};
use promenade_core::submission::{plan_registrations, RegistrationStatus};
use promenade_core::types::{DbId, Timestamp};
use promenade_db::models::dancer::UpsertDancer;
use promenade_db::models::partnership::CreatePartnership;
use promenade_db::models::registration::CreateRegistration;
use promenade_db::repositories::{
    DancerRepo, EventConfigurationRepo, EventRepo, PartnershipRepo, RegistrationRepo,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_organization(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO organizations (name, org_type) VALUES ($1, 'Ballroom') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn seed_event(pool: &PgPool, organization_id: DbId, name: &str, deadline: Timestamp) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO events \
            (organization_id, name, start_date, end_date, registration_deadline) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id",
    )
    .bind(organization_id)
    .bind(name)
    .bind(deadline + Duration::days(30))
    .bind(deadline + Duration::days(32))
    .bind(deadline)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn seed_configuration(pool: &PgPool, event_id: DbId) {
    sqlx::query(
        "INSERT INTO event_configurations \
            (event_id, age_divisions, skill_levels, dance_categories) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(event_id)
    .bind(json!([
        { "id": "d1", "name": "Adult", "display_order": 1 },
        { "id": "d2", "name": "Senior I", "min_age": 50, "display_order": 2 },
    ]))
    .bind(json!([
        { "id": "l1", "name": "Newcomer", "display_order": 1 },
    ]))
    .bind(json!([
        { "id": "c1", "name": "Smooth", "dances": ["Waltz", "Tango"] },
    ]))
    .execute(pool)
    .await
    .unwrap();
}

fn new_dancer(first: &str, last: &str, email: &str) -> UpsertDancer {
    UpsertDancer {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: None,
        date_of_birth: None,
        is_professional: false,
    }
}

// ---------------------------------------------------------------------------
// Test: Open-event listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_open_excludes_past_deadline(pool: PgPool) {
    let now = Utc::now();
    let org_id = seed_organization(&pool, "Starlight Dance Council").await;
    seed_event(&pool, org_id, "Closed Classic", now - Duration::days(1)).await;
    let open_id = seed_event(&pool, org_id, "Harvest Ball", now + Duration::days(14)).await;

    let open = EventRepo::list_open(&pool, now).await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, open_id);
    assert_eq!(open[0].name, "Harvest Ball");
    assert_eq!(open[0].organization_name, "Starlight Dance Council");
    assert_eq!(open[0].organization_type, "Ballroom");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deadline_exactly_now_is_still_open(pool: PgPool) {
    let now = Utc::now();
    let org_id = seed_organization(&pool, "Org").await;
    let event_id = seed_event(&pool, org_id, "Edge Case Open", now).await;

    let open = EventRepo::list_open(&pool, now).await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, event_id);
}

// ---------------------------------------------------------------------------
// Test: Event configuration retrieval
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_configuration_catalogs_deserialize(pool: PgPool) {
    let now = Utc::now();
    let org_id = seed_organization(&pool, "Org").await;
    let event_id = seed_event(&pool, org_id, "Configured", now + Duration::days(7)).await;
    seed_configuration(&pool, event_id).await;

    let config = EventConfigurationRepo::find_by_event(&pool, event_id)
        .await
        .unwrap()
        .expect("configuration row");

    assert_eq!(config.event_id, event_id);
    assert_eq!(config.age_divisions.len(), 2);
    assert_eq!(config.age_divisions[1].min_age, Some(50));
    assert_eq!(config.skill_levels[0].name, "Newcomer");
    assert_eq!(config.dance_categories[0].dances, ["Waltz", "Tango"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_configuration_is_none(pool: PgPool) {
    let config = EventConfigurationRepo::find_by_event(&pool, 404).await.unwrap();
    assert!(config.is_none());
}

// ---------------------------------------------------------------------------
// Test: Dancer upsert idempotence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_upsert_by_email_updates_in_place(pool: PgPool) {
    let first = DancerRepo::upsert(&pool, &new_dancer("Alex", "Reed", "alex@example.com"))
        .await
        .unwrap();

    // Same email, changed fields: must update, not duplicate.
    let mut changed = new_dancer("Alexandra", "Reed", "alex@example.com");
    changed.phone = Some("555-0100".to_string());
    let second = DancerRepo::upsert(&pool, &changed).await.unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.first_name, "Alexandra");
    assert_eq!(second.phone.as_deref(), Some("555-0100"));

    let found = DancerRepo::find_by_email(&pool, "alex@example.com")
        .await
        .unwrap()
        .expect("dancer row");
    assert_eq!(found.id, first.id);
    assert_eq!(found.first_name, "Alexandra");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dancers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// ---------------------------------------------------------------------------
// Test: Partnership and cartesian registrations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_cartesian_registration_inserts(pool: PgPool) {
    let now = Utc::now();
    let org_id = seed_organization(&pool, "Org").await;
    let event_id = seed_event(&pool, org_id, "Harvest Ball", now + Duration::days(14)).await;

    let leader = DancerRepo::upsert(&pool, &new_dancer("Alex", "Reed", "alex@example.com"))
        .await
        .unwrap();
    let follower = DancerRepo::upsert(&pool, &new_dancer("Sam", "Lane", "sam@example.com"))
        .await
        .unwrap();

    let partnership = PartnershipRepo::create(
        &pool,
        &CreatePartnership {
            leader_id: leader.id,
            follower_id: follower.id,
            event_id,
        },
    )
    .await
    .unwrap();
    assert_eq!(partnership.event_id, event_id);

    let selection = SelectionState::new()
        .with_age_division("d1", true)
        .with_age_division("d2", true)
        .with_skill_level("l1", true)
        .with_dance(DanceKey::new("c1", "Waltz"), true);

    for plan in plan_registrations(&selection) {
        RegistrationRepo::create(&pool, &CreateRegistration::from_plan(partnership.id, plan))
            .await
            .unwrap();
    }

    let rows = RegistrationRepo::list_by_partnership(&pool, partnership.id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);

    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.age_division_id.as_str(), r.skill_level_id.as_str()))
        .collect();
    assert_eq!(pairs, [("d1", "l1"), ("d2", "l1")]);

    for row in &rows {
        assert_eq!(row.selected_dances.0, [DanceKey::new("c1", "Waltz")]);
        assert_eq!(row.status().unwrap(), RegistrationStatus::Pending);
    }
}
