//! CLI type definitions: command enums and argument structs.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "brawldex")]
#[command(about = "Serve and maintain the Brawl Stars maps and brawlers site", long_about = None)]
pub(crate) struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Location of the backing documents.
#[derive(Args, Clone, Default)]
pub(crate) struct DataArgs {
    /// Directory containing maps.json and brawlers.json
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the web site
    Serve {
        #[command(flatten)]
        data: DataArgs,

        /// Address to listen on (e.g., 127.0.0.1:5000)
        #[arg(short, long)]
        bind: Option<SocketAddr>,

        /// Directory served under /static (CSS, brawler and map images) [default: static]
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Download brawler data from BrawlAPI and rewrite brawlers.json
    Refresh {
        #[command(flatten)]
        data: DataArgs,

        /// Brawler list endpoint to fetch from
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Validate the data documents (parseable, unique non-empty slugs)
    Check {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Print the URL slug for one or more names
    Slug {
        /// Display names to convert
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and their sources
    Show,

    /// Print the config file path
    Path,
}
