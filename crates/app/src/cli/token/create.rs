use clap::Args;
use crm_app::{
    auth::{PgAuthService, USER_ROLE},
    database::{self, CLIENTS_MIGRATOR},
};

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// PostgreSQL connection string of the client directory
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Roles granted to the token; repeat for several
    #[arg(long = "role", default_values_t = [USER_ROLE.to_string()])]
    roles: Vec<String>,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    if args.roles.iter().any(|role| role.trim().is_empty()) {
        return Err("role cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool, &CLIENTS_MIGRATOR)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    let service = PgAuthService::new(pool);

    let issued = service
        .issue_api_token(args.roles)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.metadata.uuid);
    println!("token_version: {}", issued.metadata.version.as_i16());
    println!("token_roles: {}", issued.metadata.roles.join(","));
    println!("token_created_at: {}", issued.metadata.created_at);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
