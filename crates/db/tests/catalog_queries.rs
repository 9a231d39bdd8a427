//! Repository and store tests against a real MySQL database.
//!
//! Run with `DATABASE_URL=mysql://... cargo test -p cinematic-db -- --ignored`.
//! Each test gets a fresh database with the schema migrated and the
//! `catalog` fixture loaded.

use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use cinematic_db::models::showtime::Showtime;
use cinematic_db::repositories::{FilmRepo, ShowtimeRepo};
use cinematic_db::{CatalogStore, MySqlCatalogStore};
use sqlx::MySqlPool;

// ---------------------------------------------------------------------------
// Films
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
#[ignore = "requires a MySQL server (DATABASE_URL)"]
async fn list_films_orders_by_title_and_joins_genre(pool: MySqlPool) {
    let films = FilmRepo::list(&pool).await.unwrap();

    let titles: Vec<&str> = films.iter().map(|f| f.titre.as_str()).collect();
    assert_eq!(titles, ["Alien", "Metropolis", "Vertigo"]);
    assert_eq!(films[2].genre_nom, "Thriller");
}

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
#[ignore = "requires a MySQL server (DATABASE_URL)"]
async fn find_by_id_returns_the_matching_film(pool: MySqlPool) {
    let film = FilmRepo::find_by_id(&pool, 7).await.unwrap().unwrap();

    assert_eq!(film.id, 7);
    assert_eq!(film.titre, "Metropolis");
    assert_eq!(film.date_sortie, NaiveDate::from_ymd_opt(1927, 1, 10));
    assert_eq!(film.duree, Some(153));
    assert_eq!(film.genre_nom, "Science-fiction");
}

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
#[ignore = "requires a MySQL server (DATABASE_URL)"]
async fn find_by_id_decodes_null_columns(pool: MySqlPool) {
    let film = FilmRepo::find_by_id(&pool, 8).await.unwrap().unwrap();

    assert_eq!(film.description, None);
    assert_eq!(film.affiche, None);
}

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
#[ignore = "requires a MySQL server (DATABASE_URL)"]
async fn find_by_unknown_id_is_none(pool: MySqlPool) {
    assert!(FilmRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(FilmRepo::find_by_id(&pool, -1).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Showtimes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
#[ignore = "requires a MySQL server (DATABASE_URL)"]
async fn showtimes_are_ordered_by_date_then_time(pool: MySqlPool) {
    let showtimes = ShowtimeRepo::list_for_film(&pool, 7).await.unwrap();

    let ids: Vec<i64> = showtimes.iter().map(|s| s.id).collect();
    assert_eq!(ids, [3, 2, 1]);
    assert_eq!(
        showtimes[1],
        Showtime {
            id: 2,
            film_id: 7,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            heure: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            places_disponibles: 12,
        }
    );
}

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
#[ignore = "requires a MySQL server (DATABASE_URL)"]
async fn showtimes_for_unknown_film_are_empty(pool: MySqlPool) {
    let showtimes = ShowtimeRepo::list_for_film(&pool, 999_999).await.unwrap();
    assert!(showtimes.is_empty());
}

// ---------------------------------------------------------------------------
// Store lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("catalog"))]
#[ignore = "requires a MySQL server (DATABASE_URL)"]
async fn store_health_check_and_close(pool: MySqlPool) {
    let store = MySqlCatalogStore::new(pool, Duration::from_secs(5));

    store.health_check().await.unwrap();
    assert_eq!(store.list_films().await.unwrap().len(), 3);

    store.close().await;
    store.close().await;
    assert!(store.pool().is_closed());
    assert!(store.list_films().await.is_err());
}
