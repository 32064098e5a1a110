use commentcloud::{app, AppState};
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    env_logger::init();

    let app = app(AppState::new());

    let listener = listener().await;
    if let Ok(addr) = listener.local_addr() {
        info!("listening on {addr}");
    }
    axum::serve(listener, app).await.unwrap();
}

#[cfg(debug_assertions)]
async fn listener() -> TcpListener {
    TcpListener::bind("0.0.0.0:3000").await.unwrap()
}

#[cfg(not(debug_assertions))]
async fn listener() -> TcpListener {
    TcpListener::bind("0.0.0.0:80").await.unwrap()
}
