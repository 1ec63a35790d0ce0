use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use include_dir::{include_dir, Dir};
use tower_http::trace::TraceLayer;

static DIST: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/dist");

// With hash routing every page lives under "/"; only bundle files are
// ever requested.
async fn static_file(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };
    match DIST.get_file(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], file.contents()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn http_server_task() -> Result<()> {
    let app = Router::new()
        .fallback(static_file)
        .layer(TraceLayer::new_for_http());
    let addr: SocketAddr = "127.0.0.1:3000".parse()?;
    tracing::info!("serving frontend bundle on http://{addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
