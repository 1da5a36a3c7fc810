use crate::app::App;
use crate::config::Config;
use crate::listings::ListingsClient;
use crate::responses::error_response;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod errors;
mod listings;
mod responses;
mod router;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Load configuration from the environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the listings API client
    let client = match ListingsClient::new(config.listings_api_url.clone(), config.listings_timeout)
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Listings client init failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let app = App::new(config, client);

    tracing::info!(api = %app.config.listings_api_url, "Starting server at http://{addr}");

    // 3️⃣ Serve requests, sharing the app with every worker
    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &app) {
            Ok(resp) => {
                tracing::debug!(%method, %path, status = resp.status().as_u16(), "request served");
                resp
            }
            Err(err) => {
                tracing::warn!(%method, %path, error = %err, "request failed");
                error_response(err)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
