use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::utils::get_charts_dir;

#[derive(Parser)]
#[command(name = "altviz")]
#[command(about = "Altcoin market and repository activity visualizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the chart sequence to HTML pages
    Render {
        /// Output directory for the generated pages
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Open each chart in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Show a summary of the embedded datasets
    Status,
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { out_dir, open } => {
            let out_dir = out_dir.unwrap_or_else(get_charts_dir);
            commands::render::run(&out_dir, open);
        }
        Commands::Status => {
            commands::status::run();
        }
    }
}
