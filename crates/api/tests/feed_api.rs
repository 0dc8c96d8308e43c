//! HTTP-level integration tests for the composed feed endpoints and cascades.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create(pool: &PgPool, uri: &str, body: Value, id_field: &str) -> Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await[id_field].clone()
}

async fn fetch(pool: &PgPool, uri: &str) -> Value {
    let app = common::build_test_app(pool.clone());
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    body_json(response).await
}

fn ids(list: &Value, field: &str) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item[field].as_i64().unwrap())
        .collect()
}

async fn toon(pool: &PgPool, title: &str, weekday: &str) -> i64 {
    create(
        pool,
        "/api/v1/toons",
        json!({
            "title": title,
            "platform": "naver",
            "weekday": weekday,
            "url": format!("https://comic.example.com/{title}"),
            "thumbnail_url": format!("https://img.example.com/{title}.jpg"),
        }),
        "toon_id",
    )
    .await
    .as_i64()
    .unwrap()
}

async fn episode(pool: &PgPool, toon_id: i64, sequence: i32, updated_at: &str) -> i64 {
    create(
        pool,
        "/api/v1/episodes",
        json!({
            "toon_id": toon_id,
            "title": format!("#{sequence}"),
            "url": "https://comic.example.com/ep",
            "thumbnail_url": "https://img.example.com/ep.jpg",
            "sequence": sequence,
            "updated_at": updated_at,
        }),
        "episode_id",
    )
    .await
    .as_i64()
    .unwrap()
}

async fn star(pool: &PgPool, user_id: &str, toon_id: i64) -> i64 {
    create(
        pool,
        "/api/v1/stars",
        json!({"user_id": user_id, "toon_id": toon_id}),
        "star_id",
    )
    .await
    .as_i64()
    .unwrap()
}

async fn view(pool: &PgPool, user_id: &str, episode_id: i64) -> i64 {
    create(
        pool,
        "/api/v1/history",
        json!({"user_id": user_id, "episode_id": episode_id}),
        "history_id",
    )
    .await
    .as_i64()
    .unwrap()
}

async fn user(pool: &PgPool, user_id: &str) {
    create(
        pool,
        "/api/v1/users",
        json!({"user_id": user_id, "pw": "1234", "name": user_id}),
        "user_id",
    )
    .await;
}

// ---------------------------------------------------------------------------
// Stars by user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stars_by_user_weekday_filter(pool: PgPool) {
    let tue_thr = toon(&pool, "a", "Tue,Thr").await;
    let wed = toon(&pool, "b", "Wed").await;
    let s1 = star(&pool, "gildong", tue_thr).await;
    let s2 = star(&pool, "gildong", wed).await;

    let all = fetch(&pool, "/api/v1/users/gildong/stars").await;
    assert_eq!(ids(&all, "star_id"), vec![s1, s2]);

    let wednesday = fetch(&pool, "/api/v1/users/gildong/stars?weekday=Wed").await;
    assert_eq!(ids(&wednesday, "star_id"), vec![s2]);

    let thursday = fetch(&pool, "/api/v1/users/gildong/stars?weekday=Thr").await;
    assert_eq!(ids(&thursday, "star_id"), vec![s1]);

    let by_toon = fetch(&pool, &format!("/api/v1/users/gildong/toons/{wed}/stars")).await;
    assert_eq!(ids(&by_toon, "star_id"), vec![s2]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bad_weekday_token_returns_400(pool: PgPool) {
    for uri in [
        "/api/v1/users/gildong/stars?weekday=Wednesday",
        "/api/v1/users/gildong/stars?weekday=Tue,Thr",
        "/api/v1/browse/naver?weekday=Thu",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Weekday representation should be one of: Mon, Tue, Wed, Thr, Fri, Sat, Sun"
        );
    }
}

// ---------------------------------------------------------------------------
// Unseen episodes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unseen_episodes(pool: PgPool) {
    let t = toon(&pool, "t", "Mon").await;
    let e1 = episode(&pool, t, 1, "2024-03-01T00:00:00Z").await;
    let e2 = episode(&pool, t, 2, "2024-03-02T00:00:00Z").await;
    let e3 = episode(&pool, t, 3, "2024-03-03T00:00:00Z").await;
    star(&pool, "kim", t).await;
    view(&pool, "kim", e1).await;

    let unseen = fetch(&pool, "/api/v1/users/kim/unseen").await;
    assert_eq!(ids(&unseen, "episode_id"), vec![e3, e2]);

    let history = fetch(&pool, "/api/v1/users/kim/history").await;
    assert_eq!(ids(&history, "episode_id"), vec![e1]);
}

// ---------------------------------------------------------------------------
// Browse
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_browse_returns_latest_episode_only(pool: PgPool) {
    let sat = toon(&pool, "weekend", "Sat,Sun").await;
    let mon = toon(&pool, "monday", "Mon").await;
    episode(&pool, sat, 1, "2024-03-01T00:00:00Z").await;
    let latest = episode(&pool, sat, 2, "2024-03-02T00:00:00Z").await;
    episode(&pool, mon, 1, "2024-03-01T00:00:00Z").await;

    let all = fetch(&pool, "/api/v1/browse/naver").await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let saturday = fetch(&pool, "/api/v1/browse/naver?weekday=Sat").await;
    let rows = saturday.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["toon"]["toon_id"], sat);
    assert_eq!(rows[0]["latest_episode"]["episode_id"], latest);
    assert_eq!(rows[0]["latest_episode"]["sequence"], 2);

    let other_platform = fetch(&pool, "/api/v1/browse/kakao").await;
    assert_eq!(other_platform, json!([]));
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_delete_clears_feed(pool: PgPool) {
    user(&pool, "lee").await;
    let t = toon(&pool, "t", "Fri").await;
    let e = episode(&pool, t, 1, "2024-03-01T00:00:00Z").await;
    let star_id = star(&pool, "lee", t).await;
    let history_id = view(&pool, "lee", e).await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(delete(app, "/api/v1/users/lee").await.status(), StatusCode::OK);

    assert_eq!(fetch(&pool, "/api/v1/users/lee").await, json!({}));
    assert_eq!(fetch(&pool, &format!("/api/v1/stars/{star_id}")).await, json!({}));
    assert_eq!(fetch(&pool, &format!("/api/v1/history/{history_id}")).await, json!({}));
    assert_eq!(fetch(&pool, "/api/v1/users/lee/stars").await, json!([]));

    // The toon and its episode are not owned by the user.
    assert_eq!(fetch(&pool, &format!("/api/v1/toons/{t}")).await["toon_id"], t);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toon_delete_clears_episodes_and_stars(pool: PgPool) {
    let t = toon(&pool, "t", "Fri").await;
    let e = episode(&pool, t, 1, "2024-03-01T00:00:00Z").await;
    let star_id = star(&pool, "moe", t).await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(delete(app, &format!("/api/v1/toons/{t}")).await.status(), StatusCode::OK);

    assert_eq!(fetch(&pool, &format!("/api/v1/episodes/{e}")).await, json!({}));
    assert_eq!(fetch(&pool, &format!("/api/v1/stars/{star_id}")).await, json!({}));
    assert_eq!(fetch(&pool, &format!("/api/v1/toons/{t}/episodes")).await, json!([]));
    assert_eq!(fetch(&pool, "/api/v1/users/moe/unseen").await, json!([]));
}
