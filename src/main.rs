use dotenvy::dotenv;
use teabot_store::config;
use teabot_store::core::{pot_maker, state};
use teabot_store::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db).await?;

    // 4. Seed the pot maker registry when a config.toml is present
    match config::makers::load_default_config() {
        Ok(makers_config) => {
            let created = pot_maker::seed_initial_pot_makers(&db, &makers_config).await?;
            info!("Seeded {} pot makers.", created);
        }
        Err(e) => info!("No seed configuration loaded: {}", e),
    }

    // 5. Report the current teapot status
    match state::get_newest_state(&db).await? {
        Some(reading) => info!(
            "Teapot is {} with {} cups as of {}",
            reading.state, reading.num_of_cups, reading.timestamp
        ),
        None => info!("No teapot data recorded yet."),
    }

    let requests = pot_maker::get_number_of_teapot_requests(&db).await?;
    info!("{} pending teapot requests.", requests);

    Ok(())
}
