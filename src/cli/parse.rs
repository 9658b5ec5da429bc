use super::prompt::resolve_pdfs;
use super::SourceArgs;
use crate::models::Settings;
use crate::services::{read_pdfs, Batch};
use crate::Result;
use anyhow::Context;

/// Read the decklists without uploading and print them as JSON
pub fn run(args: &SourceArgs) -> Result<Batch> {
    let mut settings = Settings::load(&args.settings)?;
    let files = resolve_pdfs(args, &mut settings)?;

    let batch = read_pdfs(&files, |_| {});
    let json = serde_json::to_string_pretty(&batch.decklists)
        .context("Failed to serialize decklists")?;
    println!("{}", json);

    // Rejections go to stderr so stdout stays valid JSON
    for rejection in &batch.rejected {
        eprintln!("skipped: {}", rejection);
    }
    Ok(batch)
}
