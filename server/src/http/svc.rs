use std::sync::Arc;

use anyhow::{self, Context};

use axum::{Router, routing::get};

use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use tracing::{info, instrument};

use crate::config::{HttpConfig, ServerConfig};
use crate::http::{HEALTH_PATH, healthz};
use content::{ASSET_PATH, CERTIFICATE_PATH};

// the whole http surface
//
// the app itself is a single page, so anything that isn't an asset, a certificate
// or the health check resolves against doc_root, and anything missing from there
// gets index.html and is left for the client-side router to sort out
pub fn router(config: &HttpConfig) -> Router {
    let index = config.doc_root.join("index.html");

    let app = ServeDir::new(&config.doc_root)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    Router::new()
        .route(HEALTH_PATH, get(healthz))
        .nest_service(
            &format!("/{ASSET_PATH}"),
            ServeDir::new(&config.asset_root),
        )
        .nest_service(
            &format!("/{CERTIFICATE_PATH}"),
            ServeDir::new(&config.certificate_root),
        )
        .fallback_service(app)
        .layer(TraceLayer::new_for_http())
}

#[instrument(skip_all)]
pub async fn serve_http(config: Arc<ServerConfig>) -> anyhow::Result<()> {
    let socket = config.http.socket_addr()?;

    let listener = tokio::net::TcpListener::bind(socket)
        .await
        .with_context(|| format!("failed to bind http socket {socket}"))?;

    info!("http server listening on {socket}");

    axum::serve(listener, router(&config.http))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server exited with an error")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received ctrl-c, shutting down http server"),
        // without a signal handler the server just runs until killed
        Err(err) => {
            tracing::error!("failed to install ctrl-c handler: {err}");
            std::future::pending::<()>().await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs::{create_dir, write},
        path::Path,
    };

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn layout(root: &Path) -> HttpConfig {
        for sub in ["dist", "assets", "certificates"] {
            create_dir(root.join(sub)).unwrap();
        }
        write(root.join("dist/index.html"), "<html>portfolio</html>").unwrap();
        write(root.join("dist/app.js"), "console.log(1)").unwrap();
        write(root.join("assets/resume.pdf"), "%PDF-resume").unwrap();
        write(root.join("certificates/aws.pdf"), "%PDF-cert").unwrap();

        HttpConfig {
            socket: "127.0.0.1:0".into(),
            doc_root: root.join("dist"),
            asset_root: root.join("assets"),
            certificate_root: root.join("certificates"),
        }
    }

    async fn get(config: &HttpConfig, uri: &str) -> (StatusCode, String) {
        let resp = router(config)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn health_check() {
        let dir = tempfile::tempdir().unwrap();
        let config = layout(dir.path());

        assert_eq!(get(&config, "/healthz").await, (StatusCode::OK, "ok".into()));
    }

    #[tokio::test]
    async fn serves_app_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = layout(dir.path());

        let (status, body) = get(&config, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>portfolio</html>");

        assert_eq!(
            get(&config, "/app.js").await,
            (StatusCode::OK, "console.log(1)".into())
        );
    }

    #[tokio::test]
    async fn unknown_paths_get_the_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = layout(dir.path());

        let (status, body) = get(&config, "/some/client/route").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>portfolio</html>");
    }

    #[tokio::test]
    async fn serves_assets_and_certificates() {
        let dir = tempfile::tempdir().unwrap();
        let config = layout(dir.path());

        assert_eq!(
            get(&config, "/assets/resume.pdf").await,
            (StatusCode::OK, "%PDF-resume".into())
        );
        assert_eq!(
            get(&config, "/certificates/aws.pdf").await,
            (StatusCode::OK, "%PDF-cert".into())
        );
        assert_eq!(get(&config, "/assets/missing.png").await.0, StatusCode::NOT_FOUND);
    }
}
