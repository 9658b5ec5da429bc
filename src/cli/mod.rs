pub mod parse;
pub mod prompt;
pub mod run;

use crate::models::{Rejection, SETTINGS_FILE};
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Options shared by every command that reads decklists
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Folder containing decklist PDFs (searched recursively)
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Settings file remembering the folder and sheet URL
    #[arg(long, default_value = SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Use stored settings without asking; never prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Counter-style progress bar: `<message> 3/12`
pub fn counter(message: &'static str, len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template("{msg} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message(message);
    pb
}

/// Print the documents that were skipped, with their reasons
pub fn print_rejections(rejected: &[Rejection]) {
    if rejected.is_empty() {
        return;
    }

    println!("\n{}", "The following files were not uploaded:".yellow().bold());
    for rejection in rejected {
        println!("   • {}", rejection);
    }
}
