use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use miracle74::app::AppContext;
use miracle74::cli::{commands, Cli, Commands};
use miracle74::config::Config;
use miracle74::fetcher::PowerGamersQuery;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config)?;

    let cancel = ctx.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling scrape");
            cancel.cancel();
        }
    });

    match cli.command {
        Commands::Character { name } => {
            commands::character(&ctx, &name).await?;
        }
        Commands::Guild { id } => {
            commands::guild(&ctx, id).await?;
        }
        Commands::Powergamers {
            all,
            list,
            vocation,
        } => {
            let query = PowerGamersQuery {
                list,
                vocation,
                all_pages: all,
            };
            commands::power_gamers(&ctx, &query).await?;
        }
        Commands::Insomniacs { all } => {
            commands::insomniacs(&ctx, all).await?;
        }
        Commands::Online { order } => {
            commands::who_is_online(&ctx, &order).await?;
        }
    }

    Ok(())
}
