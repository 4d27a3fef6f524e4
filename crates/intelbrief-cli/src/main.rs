use clap::{Parser, Subcommand};

mod debrief;

#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "intelbrief-cli")]
#[command(about = "Competitor intelligence debrief command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate and inspect intelligence debriefs
    Debrief {
        #[command(subcommand)]
        command: debrief::DebriefCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config load reads .env via dotenvy and fails fast on a missing
    // credential or database URL, before any network or database activity.
    let config = intelbrief_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let pool_config = intelbrief_db::PoolConfig::from_app_config(&config);
    let pool = intelbrief_db::connect_pool(&config.database_url, pool_config).await?;

    match cli.command {
        Commands::Debrief { command } => match command {
            debrief::DebriefCommands::Generate { days } => {
                debrief::run_debrief_generate(&pool, &config, days).await?;
            }
            debrief::DebriefCommands::List { limit } => {
                debrief::run_debrief_list(&pool, i64::from(limit)).await?;
            }
            debrief::DebriefCommands::Show => {
                debrief::run_debrief_show(&pool).await?;
            }
        },
    }

    Ok(())
}
