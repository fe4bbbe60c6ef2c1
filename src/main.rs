use clap::Parser;
use picture_gallery::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "picture_gallery=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Api {
            host,
            port,
            catalog,
        }) => {
            picture_gallery::cli::api::run(&cli.config, host, port, catalog).await?;
        }
        Some(Commands::Web {
            host,
            port,
            api_url,
        }) => {
            picture_gallery::cli::web::run(&cli.config, host, port, api_url).await?;
        }
        Some(Commands::Serve { api_url }) => {
            picture_gallery::cli::serve::run(&cli.config, api_url).await?;
        }
        Some(Commands::Check { catalog }) => {
            picture_gallery::cli::check::run(&cli.config, catalog).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
