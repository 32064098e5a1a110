//! A small web app that builds a word cloud from the comments on a
//! YouTube video.
//!
//! One form submission drives one fetch-and-render cycle: the
//! [`youtube`] module walks the paginated comment listing, the [`cloud`]
//! module lays the aggregated text out as a frequency-weighted image, and
//! the [`routes`] and [`html`] modules make up the form-driven shell
//! around them.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

pub mod cloud;
pub mod error;
pub mod html;
pub mod options;
pub mod routes;
pub mod youtube;

/// Shared state for the request handlers. Each request starts from a
/// clean slate; the only thing shared is the HTTP client's connection
/// pool.
#[derive(Clone)]
pub struct AppState {
    pub youtube: Arc<youtube::YouTubeService>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            youtube: Arc::new(youtube::YouTubeService::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::home))
        .route("/generate", post(routes::generate::generate))
        .route("/style/:file", get(routes::files::style))
        .with_state(state)
}
