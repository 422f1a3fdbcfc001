mod database;
mod db;
mod env;
mod error;
mod homework;
mod models;
mod report;
mod seed;
mod telemetry;
#[cfg(test)]
mod test;

use env::{database_path, load_environment};
use telemetry::init_tracing;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    if let Err(e) = load_environment() {
        error!("Failed to load environment: {}", e);
    }

    let database = database_path();
    info!("Using database {}", database.display());

    let mut stdout = std::io::stdout();
    homework::run(&database, &mut stdout).await?;

    Ok(())
}
