use crate::config::AppConfig;
use crate::context::AppContext;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;

mod analytics;
mod config;
mod context;
mod data;
mod domain;
mod errors;
mod logging;
mod prediction;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration, then logging (the log file path comes from config)
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    logging::init_logging(cfg.log_path.as_deref());

    // 2️⃣ Dataset + model; nothing is served if either fails
    let ctx = match AppContext::load(&cfg) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    tracing::info!(addr = %cfg.addr, workers = cfg.max_workers, "starting server");
    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    // 4️⃣ Serve requests, passing the context into the closure
    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, status = err.status(), "request failed");
            html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
