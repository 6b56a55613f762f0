//! Sale Ledger Service

use std::process;

use tracing::{error, info};

use crm_app::context::SaleLedgerContext;
use crm_json::{
    SALE_SERVICE_TITLE, config::SaleServiceConfig, observability, router::sale_service_router,
    server,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

const SERVICE_NAME: &str = "sale-service";

/// Sale Ledger Service entry point
#[tokio::main]
pub async fn main() {
    let config = SaleServiceConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("starting {SERVICE_NAME} on {addr}");

    let app = match SaleLedgerContext::from_database_url(&config.database.database_url).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    if let Err(serve_error) =
        server::serve(sale_service_router(app), &addr, SALE_SERVICE_TITLE, SERVICE_NAME).await
    {
        error!("{serve_error}");

        process::exit(1);
    }
}
