//! Integration tests for hard/soft deletes and their cascades.

use sqlx::PgPool;
use webtoon_core::delete_policy::EntityKind;
use webtoon_core::hashing::sha512_hex;
use webtoon_db::models::episode::CreateEpisode;
use webtoon_db::models::star::StarInput;
use webtoon_db::models::toon::ToonInput;
use webtoon_db::models::user::CreateUser;
use webtoon_db::models::view_history::ViewHistoryInput;
use webtoon_db::repositories::{EpisodeRepo, StarRepo, ToonRepo, UserRepo, ViewHistoryRepo};

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

struct Fixture {
    toon_id: i64,
    episode_ids: Vec<i64>,
    star_id: i64,
    history_ids: Vec<i64>,
}

/// One user starring one toon with two episodes, both viewed.
async fn seed(pool: &PgPool, user_id: &str) -> Fixture {
    UserRepo::create(
        pool,
        &CreateUser {
            user_id: user_id.to_string(),
            pw: sha512_hex("pw"),
            name: user_id.to_string(),
        },
    )
    .await
    .unwrap();

    let toon_id = ToonRepo::create(
        pool,
        &ToonInput {
            title: format!("{user_id}'s toon"),
            synopsis: None,
            platform: "naver".into(),
            weekday: "Mon".into(),
            url: "https://comic.example.com".into(),
            thumbnail_url: "https://img.example.com/t.jpg".into(),
        },
    )
    .await
    .unwrap();

    let mut episode_ids = Vec::new();
    for _ in 0..2 {
        let id = EpisodeRepo::create(
            pool,
            &CreateEpisode {
                toon_id,
                title: "ep".into(),
                url: "https://comic.example.com/ep".into(),
                thumbnail_url: "https://img.example.com/ep.jpg".into(),
                sequence: None,
                updated_at: None,
            },
        )
        .await
        .unwrap();
        episode_ids.push(id);
    }

    let star_id = StarRepo::create(
        pool,
        &StarInput {
            user_id: user_id.to_string(),
            toon_id,
        },
    )
    .await
    .unwrap();

    let mut history_ids = Vec::new();
    for &episode_id in &episode_ids {
        let id = ViewHistoryRepo::create(
            pool,
            &ViewHistoryInput {
                user_id: user_id.to_string(),
                episode_id,
            },
        )
        .await
        .unwrap();
        history_ids.push(id);
    }

    Fixture {
        toon_id,
        episode_ids,
        star_id,
        history_ids,
    }
}

async fn history_is_tombstoned(pool: &PgPool, history_id: i64) -> bool {
    ViewHistoryRepo::find_by_id_include_deleted(pool, history_id)
        .await
        .unwrap()
        .is_some_and(|h| h.deleted_at.is_some())
}

// ---------------------------------------------------------------------------
// Soft deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_star_delete_leaves_tombstone(pool: PgPool) {
    let f = seed(&pool, "amy").await;

    let report = StarRepo::delete(&pool, f.star_id).await.unwrap();
    assert!(report.deleted);
    assert!(report.cascaded.is_empty());

    assert!(StarRepo::find_by_id(&pool, f.star_id).await.unwrap().is_none());
    let raw = StarRepo::find_by_id_include_deleted(&pool, f.star_id)
        .await
        .unwrap()
        .unwrap();
    assert!(raw.deleted_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_a_tombstone_reports_nothing(pool: PgPool) {
    let f = seed(&pool, "ben").await;
    assert!(ViewHistoryRepo::delete(&pool, f.history_ids[0]).await.unwrap().deleted);

    let first_stamp = ViewHistoryRepo::find_by_id_include_deleted(&pool, f.history_ids[0])
        .await
        .unwrap()
        .unwrap()
        .deleted_at;

    let again = ViewHistoryRepo::delete(&pool, f.history_ids[0]).await.unwrap();
    assert!(!again.deleted);

    let second_stamp = ViewHistoryRepo::find_by_id_include_deleted(&pool, f.history_ids[0])
        .await
        .unwrap()
        .unwrap()
        .deleted_at;
    assert_eq!(first_stamp, second_stamp, "tombstone time is not refreshed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_deleted_rows_are_hidden_from_lists(pool: PgPool) {
    let f = seed(&pool, "cat").await;
    ViewHistoryRepo::delete(&pool, f.history_ids[0]).await.unwrap();
    StarRepo::delete(&pool, f.star_id).await.unwrap();

    let by_user = ViewHistoryRepo::list_by_user(&pool, "cat").await.unwrap();
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].history_id, f.history_ids[1]);

    let by_episode = ViewHistoryRepo::list_by_episode(&pool, f.episode_ids[0])
        .await
        .unwrap();
    assert!(by_episode.is_empty());

    let stars = StarRepo::list_by_user_and_toon(&pool, "cat", f.toon_id)
        .await
        .unwrap();
    assert!(stars.is_empty());
}

// ---------------------------------------------------------------------------
// Hard deletes and cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_primary_row_deletes_nothing(pool: PgPool) {
    let f = seed(&pool, "dan").await;

    let report = ToonRepo::delete(&pool, f.toon_id + 1000).await.unwrap();
    assert!(!report.deleted);
    assert!(report.cascaded.is_empty());
    assert!(UserRepo::delete(&pool, "nobody").await.unwrap().cascaded.is_empty());

    assert_eq!(EpisodeRepo::list_by_toon(&pool, f.toon_id).await.unwrap().len(), 2);
    assert!(StarRepo::find_by_id(&pool, f.star_id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_delete_cascades_to_stars_and_history(pool: PgPool) {
    let f = seed(&pool, "eve").await;
    let other = seed(&pool, "fox").await;

    let report = UserRepo::delete(&pool, "eve").await.unwrap();
    assert!(report.deleted);
    assert_eq!(report.cascaded_count(EntityKind::Star), 1);
    assert_eq!(report.cascaded_count(EntityKind::ViewHistory), 2);

    assert!(UserRepo::find_by_id(&pool, "eve").await.unwrap().is_none());
    assert!(StarRepo::find_by_id(&pool, f.star_id).await.unwrap().is_none());
    for id in &f.history_ids {
        assert!(history_is_tombstoned(&pool, *id).await);
    }

    // Toons and episodes are not owned by the user.
    assert!(ToonRepo::find_by_id(&pool, f.toon_id).await.unwrap().is_some());
    assert_eq!(EpisodeRepo::list_by_toon(&pool, f.toon_id).await.unwrap().len(), 2);

    // Another user's rows are untouched.
    assert!(StarRepo::find_by_id(&pool, other.star_id).await.unwrap().is_some());
    assert_eq!(ViewHistoryRepo::list_by_user(&pool, "fox").await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toon_delete_cascades_through_episodes(pool: PgPool) {
    let f = seed(&pool, "gus").await;

    let report = ToonRepo::delete(&pool, f.toon_id).await.unwrap();
    assert!(report.deleted);
    assert_eq!(report.cascaded_count(EntityKind::Episode), 2);
    assert_eq!(report.cascaded_count(EntityKind::Star), 1);
    assert_eq!(report.cascaded_count(EntityKind::ViewHistory), 2);

    assert!(ToonRepo::find_by_id(&pool, f.toon_id).await.unwrap().is_none());
    for id in &f.episode_ids {
        assert!(EpisodeRepo::find_by_id(&pool, *id).await.unwrap().is_none());
    }
    let star = StarRepo::find_by_id_include_deleted(&pool, f.star_id)
        .await
        .unwrap()
        .unwrap();
    assert!(star.deleted_at.is_some(), "star is tombstoned, not removed");
    for id in &f.history_ids {
        assert!(history_is_tombstoned(&pool, *id).await);
    }

    // The user survives.
    assert!(UserRepo::find_by_id(&pool, "gus").await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_episode_delete_cascades_to_history(pool: PgPool) {
    let f = seed(&pool, "hal").await;

    let report = EpisodeRepo::delete(&pool, f.episode_ids[0]).await.unwrap();
    assert!(report.deleted);
    assert_eq!(report.cascaded, vec![(EntityKind::ViewHistory, 1)]);

    assert!(history_is_tombstoned(&pool, f.history_ids[0]).await);
    assert!(!history_is_tombstoned(&pool, f.history_ids[1]).await);
    assert!(EpisodeRepo::find_by_id(&pool, f.episode_ids[1]).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_cascade_rolls_back_primary_delete(pool: PgPool) {
    let f = seed(&pool, "ivy").await;

    sqlx::raw_sql(
        "CREATE FUNCTION reject_history_update() RETURNS trigger AS $$
         BEGIN
             RAISE EXCEPTION 'view_history is read-only';
         END;
         $$ LANGUAGE plpgsql;
         CREATE TRIGGER view_history_read_only
             BEFORE UPDATE ON view_history
             FOR EACH ROW EXECUTE FUNCTION reject_history_update();",
    )
    .execute(&pool)
    .await
    .unwrap();

    assert!(EpisodeRepo::delete(&pool, f.episode_ids[0]).await.is_err());

    assert!(EpisodeRepo::find_by_id(&pool, f.episode_ids[0]).await.unwrap().is_some());
    assert!(ViewHistoryRepo::find_by_id(&pool, f.history_ids[0]).await.unwrap().is_some());
    assert!(!history_is_tombstoned(&pool, f.history_ids[0]).await);
}
