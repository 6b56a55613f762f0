//! Sale Ledger Lookup Config

use clap::Args;
use crm_app::domain::sales::DEFAULT_SALES_SERVICE_URL;

/// Where the client directory reaches the sale ledger.
#[derive(Debug, Args)]
pub struct SalesServiceConfig {
    /// Base URL of the sale ledger service
    #[arg(long, env = "SALES_SERVICE_URL", default_value = DEFAULT_SALES_SERVICE_URL)]
    pub sales_service_url: String,
}
