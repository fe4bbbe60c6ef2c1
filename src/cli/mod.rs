pub mod api;
pub mod check;
pub mod serve;
pub mod web;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery")]
#[command(version)]
#[command(about = "A tiny picture gallery: catalog service and gallery view", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "gallery.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the read-only catalog endpoint
    Api {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
        /// Backing catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Serve the HTML gallery view
    Web {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
        /// Catalog endpoint the view fetches from
        #[arg(long, env = "GALLERY_API_URL")]
        api_url: Option<String>,
    },
    /// Serve the catalog endpoint and the gallery view together
    Serve {
        #[arg(long, env = "GALLERY_API_URL")]
        api_url: Option<String>,
    },
    /// Validate the catalog file without starting a server
    Check {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}
