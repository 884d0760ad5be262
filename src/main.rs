mod model;
mod server;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::report,
    startup,
    state::AppState,
    util::token::TokenMaker,
};

#[derive(Parser)]
#[command(version, about = "Attendance and HR management backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default). The report scheduler runs alongside unless disabled.
    Serve {
        /// Do not start the embedded report scheduler.
        #[arg(long)]
        without_worker: bool,
    },
    /// Run only the report scheduler until Ctrl-C.
    Worker,
    /// Generate one daily monitoring report and exit.
    Report,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Serve {
        without_worker: false,
    }) {
        Command::Serve { without_worker } => serve(config, without_worker).await,
        Command::Worker => worker(config).await,
        Command::Report => {
            let db = startup::connect_to_database(&config).await?;
            let generated = report::run_daily_report(&db).await?;
            tracing::info!("Stored report {} ({})", generated.id, generated.generated_at);
            Ok(())
        }
    }
}

async fn serve(config: Config, without_worker: bool) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config).await?;
    let cache = startup::connect_to_cache(&config).await?;

    let mut scheduler = if without_worker {
        None
    } else {
        Some(report::start_scheduler(db.clone(), &config.report_cron).await?)
    };

    let state = AppState::new(
        db,
        cache,
        TokenMaker::from_config(&config),
        config.app_name.clone(),
        config.app_version.clone(),
    );
    let app = router::router(state, &config.allowed_origins);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(
        "Starting {} {} ({}) on {}",
        config.app_name,
        config.app_version,
        config.app_env,
        address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    tracing::info!("Server stopped");

    Ok(())
}

async fn worker(config: Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config).await?;
    let mut scheduler = report::start_scheduler(db, &config.report_cron).await?;

    shutdown_signal().await;
    scheduler.shutdown().await?;

    tracing::info!("Worker stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
        Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
    }
}
