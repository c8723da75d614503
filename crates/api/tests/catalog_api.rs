//! HTTP-level tests for the card catalog and the admin dashboard.

mod common;

use axum::http::StatusCode;
use cardforge_core::cards::CardForm;
use cardforge_db::models::card::CreateCard;
use cardforge_db::repositories::{CardRepo, SubmissionRepo};
use common::{
    admin_token, body_json, build_test_app, build_test_app_with, count, delete_auth, get_auth,
    next_notice, post_json_auth, put_json_auth, RecordingNotifier,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn card(name: &str, form: CardForm) -> CreateCard {
    CreateCard {
        character_name: name.to_string(),
        form,
        image_url: format!("http://img/{name}.png"),
        series: None,
        event_name: None,
        description: None,
        approved: true,
    }
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["character_name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_inserts_an_unowned_card_and_announces_it(pool: PgPool) {
    let (notifier, mut rx) = RecordingNotifier::new();
    let app = build_test_app_with(pool.clone(), notifier);
    let body = json!({
        "name": "Nyx",
        "form": "Event",
        "image_url": "http://x/nyx.png",
        "event_name": "Halloween",
    });
    let response = post_json_auth(app, "/api/v1/cards", body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["form"], "event");
    assert!(json["data"]["owner_id"].is_null());

    let notice = next_notice(&mut rx).await;
    assert_eq!(notice.event_type, "card.created");
    assert_eq!(notice.event_name.as_deref(), Some("Halloween"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_names_are_allowed(pool: PgPool) {
    for _ in 0..2 {
        let app = build_test_app(pool.clone());
        let body = json!({ "name": "Nyx", "form": "base", "image_url": "http://x/nyx.png" });
        let response = post_json_auth(app, "/api/v1/cards", body, &admin_token()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    assert_eq!(count(&pool, "cards").await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_image_is_a_field_error(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let body = json!({ "name": "Nyx", "form": "base", "image_url": "" });
    let response = post_json_auth(app, "/api/v1/cards", body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "image_url");
    assert_eq!(count(&pool, "cards").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_missing_fields_is_a_field_error(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let body = json!({ "form": "base", "image_url": "http://x/nyx.png" });
    let response = post_json_auth(app, "/api/v1/cards", body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "name");

    let app = build_test_app(pool.clone());
    let body = json!({ "name": "Nyx", "image_url": "http://x/nyx.png" });
    let response = post_json_auth(app, "/api/v1/cards", body, &admin_token()).await;
    assert_eq!(body_json(response).await["field"], "form");
    assert_eq!(count(&pool, "cards").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_forms_inserts_one_named_card_per_form(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let body = json!({
        "name": "Nyx",
        "images": {
            "base": "http://x/b.png",
            "awakened": "http://x/a.png",
            "event": "  ",
        },
        "series": "Origins",
    });
    let response = post_json_auth(app, "/api/v1/cards/forms", body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let mut created = names(&body_json(response).await);
    created.sort();
    assert_eq!(created, vec!["Nyx (Awakened)", "Nyx (Base)"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_forms_is_not_announced(pool: PgPool) {
    let (notifier, mut rx) = RecordingNotifier::new();

    let app = build_test_app_with(pool.clone(), notifier.clone());
    let body = json!({ "name": "Nyx", "images": { "base": "http://x/b.png" } });
    let response = post_json_auth(app, "/api/v1/cards/forms", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app_with(pool, notifier);
    let body = json!({ "name": "Vex", "form": "base", "image_url": "http://x/v.png" });
    let response = post_json_auth(app, "/api/v1/cards", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The only notice on the channel is the direct create.
    let notice = next_notice(&mut rx).await;
    assert_eq!(notice.name, "Vex");
    assert!(rx.try_recv().is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_forms_with_missing_name_is_a_field_error(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let body = json!({ "images": { "base": "http://x/b.png" } });
    let response = post_json_auth(app, "/api/v1/cards/forms", body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "name");
    assert_eq!(count(&pool, "cards").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_forms_with_an_unknown_form_writes_nothing(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let body = json!({
        "name": "Nyx",
        "images": { "base": "http://x/b.png", "mythic": "http://x/m.png" },
    });
    let response = post_json_auth(app, "/api/v1/cards/forms", body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "images");
    assert_eq!(count(&pool, "cards").await, 0);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_filter_returns_only_event_cards_newest_first(pool: PgPool) {
    CardRepo::create(&pool, &card("Old Event", CardForm::Event)).await.unwrap();
    CardRepo::create(&pool, &card("Plain", CardForm::Base)).await.unwrap();
    CardRepo::create(&pool, &card("New Event", CardForm::Event)).await.unwrap();

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/cards?form=event", &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&body_json(response).await), vec!["New Event", "Old Event"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_capped_at_fifty(pool: PgPool) {
    let inputs: Vec<CreateCard> = (0..55)
        .map(|i| card(&format!("Card {i}"), CardForm::Event))
        .collect();
    CardRepo::create_many(&pool, &inputs).await.unwrap();

    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/cards?form=event&limit=500", &admin_token()).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 50);

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/cards?form=all", &admin_token()).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 50);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_and_combines_with_filter(pool: PgPool) {
    CardRepo::create(&pool, &card("Nyx", CardForm::Base)).await.unwrap();
    CardRepo::create(&pool, &card("Nyxara", CardForm::Event)).await.unwrap();
    CardRepo::create(&pool, &card("Vex", CardForm::Event)).await.unwrap();

    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/cards?search=NYX", &admin_token()).await;
    assert_eq!(names(&body_json(response).await), vec!["Nyxara", "Nyx"]);

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/cards?search=nyx&form=event", &admin_token()).await;
    assert_eq!(names(&body_json(response).await), vec!["Nyxara"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_form_filter_is_a_field_error(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/cards?form=mythic", &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "form");
}

// ---------------------------------------------------------------------------
// Get / update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_overwrites_supplied_fields(pool: PgPool) {
    let created = CardRepo::create(&pool, &card("Nyx", CardForm::Base)).await.unwrap();

    let app = build_test_app(pool.clone());
    let body = json!({ "character_name": "Nyx Prime", "form": "awakened", "series": "Origins" });
    let response =
        put_json_auth(app, &format!("/api/v1/cards/{}", created.id), body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["character_name"], "Nyx Prime");
    assert_eq!(json["data"]["form"], "awakened");
    assert_eq!(json["data"]["series"], "Origins");
    assert_eq!(json["data"]["image_url"], "http://img/Nyx.png");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_optional_text_leaves_stored_values(pool: PgPool) {
    let mut input = card("Nyx", CardForm::Base);
    input.series = Some("Origins".into());
    let created = CardRepo::create(&pool, &input).await.unwrap();

    let app = build_test_app(pool.clone());
    let body = json!({ "series": "  ", "description": "" });
    let response =
        put_json_auth(app, &format!("/api/v1/cards/{}", created.id), body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["series"], "Origins");
    assert!(json["data"]["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_returns_the_stored_card(pool: PgPool) {
    let created = CardRepo::create(&pool, &card("Vex", CardForm::Event)).await.unwrap();

    let app = build_test_app(pool);
    let uri = format!("/api/v1/cards/{}", created.id);
    let response = get_auth(app, &uri, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], created.id);
    assert_eq!(json["data"]["character_name"], "Vex");
    assert_eq!(json["data"]["form"], "event");
    assert!(json["data"]["owner_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_a_missing_card_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);
    let body = json!({ "character_name": "Ghost" });
    let response = put_json_auth(app, "/api/v1/cards/9999", body, &admin_token()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Card with id 9999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_the_card(pool: PgPool) {
    let created = CardRepo::create(&pool, &card("Nyx", CardForm::Base)).await.unwrap();
    let uri = format!("/api/v1/cards/{}", created.id);

    let app = build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool.clone());
    let response = get_auth(app, &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = build_test_app(pool);
    let response = delete_auth(app, &uri, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_counts_every_form(pool: PgPool) {
    CardRepo::create(&pool, &card("A", CardForm::Event)).await.unwrap();
    CardRepo::create(&pool, &card("B", CardForm::Event)).await.unwrap();
    SubmissionRepo::create(
        &pool,
        &cardforge_db::models::submission::CreateSubmission {
            title: "Queued".into(),
            form_type: CardForm::Base,
            series: None,
            event_name: None,
            image_url: "http://x/q.png".into(),
            submitted_by: "maker".into(),
        },
    )
    .await
    .unwrap();

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/dashboard", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(
        data["form_counts"],
        json!([
            { "form": "base", "count": 0 },
            { "form": "awakened", "count": 0 },
            { "form": "event", "count": 2 },
        ])
    );
    assert_eq!(data["total_cards"], 2);
    assert_eq!(data["pending_count"], 1);
    assert_eq!(data["recent_cards"][0]["character_name"], "B");
    assert_eq!(data["pending_submissions"][0]["title"], "Queued");
}
