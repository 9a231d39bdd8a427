#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{NaiveDate, NaiveTime};
use cinematic_api::config::ServerConfig;
use cinematic_api::router::build_app;
use cinematic_api::state::AppState;
use cinematic_db::models::film::Film;
use cinematic_db::models::showtime::Showtime;
use cinematic_db::{CatalogStore, InMemoryCatalogStore, StoreError};
use http_body_util::BodyExt;
use tokio::sync::Notify;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|var| match var {
        "CORS_ORIGINS" => Some("https://cine.example".to_string()),
        _ => None,
    })
    .expect("test configuration is valid")
}

/// Build a test `ServerConfig` with extra variables layered over the defaults.
pub fn test_config_with(vars: &[(&str, &str)]) -> ServerConfig {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|var| {
        vars.iter()
            .find(|(k, _)| k == var)
            .map(|(_, v)| v.clone())
    })
    .expect("test configuration is valid")
}

/// Build the full application with all middleware layers over `store`.
pub fn build_test_app(store: Arc<InMemoryCatalogStore>) -> NormalizePath<Router> {
    build_app(AppState::new(store, test_config()))
}

pub fn film(id: i64, titre: &str, genre_nom: &str) -> Film {
    Film {
        id,
        titre: titre.to_string(),
        description: Some(format!("Synopsis de {titre}")),
        date_sortie: NaiveDate::from_ymd_opt(1979, 5, 25),
        duree: Some(117),
        realisateur: Some("Ridley Scott".to_string()),
        affiche: Some(format!("posters/{id}.jpg")),
        genre_id: 1,
        genre_nom: genre_nom.to_string(),
    }
}

pub fn showtime(id: i64, film_id: i64, date: &str, heure: &str) -> Showtime {
    Showtime {
        id,
        film_id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        heure: NaiveTime::parse_from_str(heure, "%H:%M").unwrap(),
        places_disponibles: 42,
    }
}

/// A small catalog: three films, film 7 with two showtimes out of order.
pub fn seeded_store() -> Arc<InMemoryCatalogStore> {
    Arc::new(InMemoryCatalogStore::new(
        vec![
            film(9, "Vertigo", "Thriller"),
            film(7, "Alien", "Science-fiction"),
            film(8, "Metropolis", "Science-fiction"),
        ],
        vec![
            showtime(1, 7, "2024-05-02", "18:00"),
            showtime(2, 7, "2024-05-01", "20:00"),
            showtime(3, 9, "2024-05-03", "21:00"),
        ],
    ))
}

pub async fn get(app: NormalizePath<Router>, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A store whose `list_films` parks until the test releases it.
///
/// `entered` fires when a listing starts. Every other call answers at once.
#[derive(Default)]
pub struct GatedStore {
    pub entered: Notify,
    pub release: Notify,
    closed: AtomicBool,
}

impl GatedStore {
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogStore for GatedStore {
    async fn list_films(&self) -> Result<Vec<Film>, StoreError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(Vec::new())
    }

    async fn get_film(&self, _id: i64) -> Result<Option<Film>, StoreError> {
        Ok(None)
    }

    async fn list_showtimes(&self, _film_id: i64) -> Result<Vec<Showtime>, StoreError> {
        Ok(Vec::new())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
