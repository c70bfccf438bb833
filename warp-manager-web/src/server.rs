//! Loopback HTTP server hosting the management page.

use std::io;

use actix_web::{App, HttpServer, middleware, web};
use anyhow::{Context, anyhow};

use crate::browser;
use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Bind the listener, optionally open the page, and serve until shutdown.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let page_url = config.page_url();
    let open_browser = config.open_browser;
    let port = config.port;

    let state = web::Data::new(AppState::new(config));
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::new("%a \"%r\" %s %Dms"))
            .configure(routes::configure)
    })
    .bind(addr)
    .map_err(|e| bind_error(e, port))?;

    tracing::info!(%addr, "Server listening");
    tracing::info!("Management page: {page_url}");

    if open_browser {
        match browser::open(&page_url) {
            Ok(()) => tracing::info!("Opened browser"),
            Err(e) => tracing::warn!(error = %e, "Could not open a browser, visit {page_url} manually"),
        }
    }

    server.run().await.context("server terminated unexpectedly")?;
    tracing::info!("Server stopped");
    Ok(())
}

fn bind_error(err: io::Error, port: u16) -> anyhow::Error {
    if err.kind() == io::ErrorKind::AddrInUse {
        let suggestion = port.checked_add(1).unwrap_or(8081);
        anyhow!("Port {port} is already in use, try another one: --port {suggestion}")
    } else {
        anyhow::Error::new(err).context(format!("Failed to bind port {port}"))
    }
}
