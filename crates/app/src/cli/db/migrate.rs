use clap::{Args, ValueEnum};
use crm_app::database::{self, CLIENTS_MIGRATOR, SALES_MIGRATOR};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum MigrationTarget {
    /// Client directory schema (clients, api tokens)
    Clients,
    /// Sale ledger schema
    Sales,
}

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Which service's schema to apply
    #[arg(long, value_enum)]
    target: MigrationTarget,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let migrator = match args.target {
        MigrationTarget::Clients => &CLIENTS_MIGRATOR,
        MigrationTarget::Sales => &SALES_MIGRATOR,
    };

    database::migrate(&pool, migrator)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    println!("applied {:?} migrations", args.target);

    Ok(())
}
