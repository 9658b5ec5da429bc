use super::prompt::{resolve_pdfs, resolve_sheet_url};
use super::{counter, print_rejections, SourceArgs};
use crate::models::Settings;
use crate::services::{read_pdfs, upload, Batch, UploadOutcome};
use crate::sheet::google::TOKEN_ENV;
use crate::sheet::GoogleSheetsClient;
use crate::Result;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Google Sheet URL to upload to
    #[arg(long)]
    pub sheet_url: Option<String>,

    /// OAuth access token for the Google Sheets API (defaults to $DECKSHEET_ACCESS_TOKEN)
    #[arg(long)]
    pub token: Option<String>,
}

/// Everything a run produced
#[derive(Debug)]
pub struct RunReport {
    pub batch: Batch,
    pub outcome: UploadOutcome,
}

/// Read every decklist in the folder and upload them to a new worksheet tab
pub fn run(args: &RunArgs) -> Result<RunReport> {
    let mut settings = Settings::load(&args.source.settings)?;

    println!("{}", "📂 Starting to read PDFs...".cyan());
    let files = resolve_pdfs(&args.source, &mut settings)?;

    println!("{}", "📖 Reading the PDFs...".cyan());
    let progress = counter("Reading decklists", files.len());
    let batch = read_pdfs(&files, |_| progress.inc(1));
    progress.finish();
    println!(
        "{}",
        format!(
            "✅ {} decklist(s) read, {} skipped",
            batch.decklists.len(),
            batch.rejected.len()
        )
        .green()
    );

    println!("{}", "🔗 Preparing to access the Google Sheet...".cyan());
    let url = resolve_sheet_url(args.sheet_url.as_deref(), &args.source, &mut settings)?;
    let token = args
        .token
        .clone()
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .unwrap_or_default();

    let outcome = match GoogleSheetsClient::from_url(&url, token) {
        Ok(mut client) => {
            println!("{}", "📝 Filling the Google Sheet...".cyan());
            let progress = counter("Processing decklists", batch.decklists.len());
            upload(&mut client, &batch.decklists, chrono::Local::now().date_naive(), &progress)
        }
        Err(e) => UploadOutcome::SinkFailed(e),
    };

    match &outcome {
        UploadOutcome::Uploaded { worksheet, count } => println!(
            "{}",
            format!("✅ Uploaded {} decklist(s) to '{}'", count, worksheet).green()
        ),
        UploadOutcome::SinkFailed(e) => println!(
            "{}",
            format!("❌ An unexpected error occurred.\n{}", e).red()
        ),
    }
    print_rejections(&batch.rejected);

    Ok(RunReport { batch, outcome })
}
