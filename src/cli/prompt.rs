//! Resolving the PDF folder and sheet URL from flags, stored settings, or the operator

use super::SourceArgs;
use crate::models::Settings;
use crate::services::discover_pdfs;
use crate::sheet::spreadsheet_id;
use crate::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

fn confirm_stored(what: &str, value: &str) -> Result<bool> {
    eprintln!("{}", value);
    let keep = Confirm::new()
        .with_prompt(format!("Do you want to use this {}?", what))
        .default(true)
        .interact()?;
    Ok(keep)
}

/// Work out which folder to read and return the PDFs in it.
///
/// A `--folder` flag wins, then the stored folder (confirmed unless `--yes`),
/// then a prompt. A folder without PDFs is retried interactively, or fails
/// with `--yes`. The chosen folder is saved back to the settings file.
pub fn resolve_pdfs(args: &SourceArgs, settings: &mut Settings) -> Result<Vec<PathBuf>> {
    let mut flag = args.folder.clone();
    let mut offer_stored = true;

    loop {
        let folder = if let Some(folder) = flag.take() {
            folder
        } else if offer_stored
            && settings.has_folder()
            && (args.yes || confirm_stored("path", &settings.pdfs_folder_path)?)
        {
            PathBuf::from(&settings.pdfs_folder_path)
        } else if args.yes {
            anyhow::bail!("No PDF folder configured. Pass --folder <DIR>.");
        } else {
            let input: String = Input::new()
                .with_prompt("Enter PDF folder path")
                .interact_text()?;
            PathBuf::from(input.trim())
        };
        offer_stored = false;

        let files = match discover_pdfs(&folder) {
            Ok(files) => files,
            Err(e) if !args.yes => {
                eprintln!("{}", format!("{}. Please try again.", e).yellow());
                continue;
            }
            Err(e) => return Err(e),
        };

        if files.is_empty() {
            if args.yes {
                anyhow::bail!("No PDF files were found in {}", folder.display());
            }
            eprintln!("{}", "No PDF files were found. Please try again.".yellow());
            continue;
        }

        settings.pdfs_folder_path = folder.display().to_string();
        settings.save(&args.settings)?;
        return Ok(files);
    }
}

/// Work out which spreadsheet to upload to, with the same precedence as the folder.
pub fn resolve_sheet_url(
    flag: Option<&str>,
    args: &SourceArgs,
    settings: &mut Settings,
) -> Result<String> {
    let url = if let Some(url) = flag {
        if spreadsheet_id(url).is_none() {
            anyhow::bail!("It is not a Google Sheet URL: {}", url);
        }
        url.trim().to_string()
    } else if settings.has_sheet_url()
        && spreadsheet_id(&settings.google_sheet_url).is_some()
        && (args.yes || confirm_stored("url", &settings.google_sheet_url)?)
    {
        return Ok(settings.google_sheet_url.clone());
    } else if args.yes {
        anyhow::bail!("No Google Sheet URL configured. Pass --sheet-url <URL>.");
    } else {
        let input: String = Input::new()
            .with_prompt("Enter Google Sheet url")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                match spreadsheet_id(input) {
                    Some(_) => Ok(()),
                    None => Err("It is not a Google Sheet URL. Please try again."),
                }
            })
            .interact_text()?;
        input.trim().to_string()
    };

    settings.google_sheet_url = url.clone();
    settings.save(&args.settings)?;
    Ok(url)
}
