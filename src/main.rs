use crate::app::Storefront;
use crate::config::StorefrontConfig;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};

mod app;
mod backend;
mod catalog;
mod config;
mod domain;
mod errors;
mod forms;
mod logging;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logging::init_logging();

    let cfg = match StorefrontConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = match Storefront::from_config(&cfg) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "storefront initialization failed");
            std::process::exit(1);
        }
    };

    info!(
        addr = %cfg.addr,
        backend = %cfg.backend_url,
        workers = cfg.workers,
        seeded = cfg.seed_path.is_some(),
        "starting storefront"
    );

    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
