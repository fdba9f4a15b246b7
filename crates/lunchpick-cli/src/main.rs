use anyhow::Result;
use clap::{Parser, Subcommand};
use lunchpick_core::view::SortKey;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lunchpick")]
#[command(about = "Weighted lunch-spot picker for the team", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a restaurant, favoring venues picked less often
    Pick,
    /// Show the restaurant table
    Table {
        /// Keep only rows whose name, cuisine, or address contains this text
        #[arg(long)]
        search: Option<String>,
        /// Column to sort by: id, name, reviews, cost, type, address,
        /// time, times_picked
        #[arg(long = "sort-by")]
        sort_by: Option<SortKey>,
        /// Sort descending instead of ascending
        #[arg(long, requires = "sort_by")]
        desc: bool,
        /// 1-based page number (10 rows per page)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Reset every pick counter to zero (allowed once per session)
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pick => commands::pick::run().await?,
        Commands::Table {
            search,
            sort_by,
            desc,
            page,
        } => commands::table::run(search, sort_by, desc, page).await?,
        Commands::Reset => commands::reset::run().await?,
    }

    Ok(())
}
