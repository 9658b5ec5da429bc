//! Upload service - writing a batch of decklists to a new worksheet tab

use crate::models::Decklist;
use crate::sheet::{unique_worksheet_name, SheetSink, SinkError, WORKSHEET_COLS, WORKSHEET_ROWS};
use chrono::NaiveDate;
use indicatif::ProgressBar;
use tracing::info;

/// Row holding each player's name
pub const PLAYER_ROW: usize = 1;
/// Row holding each player's card list
pub const CARDS_ROW: usize = 2;
/// Columns A..=Z are top-aligned once everything is written
pub const ALIGNED_COLUMNS: std::ops::RangeInclusive<usize> = 1..=26;

/// How an upload ended
#[derive(Debug)]
pub enum UploadOutcome {
    Uploaded { worksheet: String, count: usize },
    SinkFailed(SinkError),
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }
}

/// Create a fresh tab named after `today` and write one column per decklist.
///
/// The first sink error stops the upload; nothing already written is undone.
pub fn upload(
    sink: &mut impl SheetSink,
    decklists: &[Decklist],
    today: NaiveDate,
    progress: &ProgressBar,
) -> UploadOutcome {
    match try_upload(sink, decklists, today, progress) {
        Ok(worksheet) => UploadOutcome::Uploaded {
            worksheet,
            count: decklists.len(),
        },
        Err(e) => UploadOutcome::SinkFailed(e),
    }
}

fn try_upload(
    sink: &mut impl SheetSink,
    decklists: &[Decklist],
    today: NaiveDate,
    progress: &ProgressBar,
) -> Result<String, SinkError> {
    let existing = sink.worksheet_titles()?;
    let title = unique_worksheet_name(&existing, today);
    let worksheet = sink.add_worksheet(&title, existing.len(), WORKSHEET_ROWS, WORKSHEET_COLS)?;
    info!(worksheet = %worksheet.title, decklists = decklists.len(), "created worksheet");

    progress.set_length(decklists.len() as u64);
    for (i, decklist) in decklists.iter().enumerate() {
        let col = i + 1;
        sink.update_cell(&worksheet, PLAYER_ROW, col, &decklist.player)?;
        sink.update_cell(&worksheet, CARDS_ROW, col, &decklist.cards)?;
        progress.inc(1);
    }
    progress.finish();

    sink.align_columns_top(&worksheet, ALIGNED_COLUMNS)?;
    Ok(worksheet.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Worksheet;
    use std::ops::RangeInclusive;

    #[derive(Default)]
    struct Recorder {
        titles: Vec<String>,
        added: Vec<(String, usize, usize, usize)>,
        cells: Vec<(usize, usize, String)>,
        aligned: Option<RangeInclusive<usize>>,
        fail_on_cell: Option<usize>,
    }

    impl SheetSink for Recorder {
        fn worksheet_titles(&mut self) -> Result<Vec<String>, SinkError> {
            Ok(self.titles.clone())
        }

        fn add_worksheet(
            &mut self,
            title: &str,
            index: usize,
            rows: usize,
            cols: usize,
        ) -> Result<Worksheet, SinkError> {
            self.added.push((title.to_string(), index, rows, cols));
            Ok(Worksheet {
                id: 7,
                title: title.to_string(),
            })
        }

        fn update_cell(
            &mut self,
            _worksheet: &Worksheet,
            row: usize,
            col: usize,
            value: &str,
        ) -> Result<(), SinkError> {
            if self.fail_on_cell == Some(self.cells.len()) {
                return Err(SinkError::Api {
                    status: 429,
                    body: "quota".to_string(),
                });
            }
            self.cells.push((row, col, value.to_string()));
            Ok(())
        }

        fn align_columns_top(
            &mut self,
            _worksheet: &Worksheet,
            columns: RangeInclusive<usize>,
        ) -> Result<(), SinkError> {
            self.aligned = Some(columns);
            Ok(())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    }

    fn decklists() -> Vec<Decklist> {
        vec![
            Decklist::new("Jo Smith", "Burn", "4 Lightning Bolt\nSIDEBOARD\n2 Island"),
            Decklist::new("Sam Lee", "Tron", "4 Karn Liberated\nSIDEBOARD\n"),
        ]
    }

    #[test]
    fn test_upload_writes_one_column_per_player() {
        let mut sink = Recorder {
            titles: vec!["Sheet1".to_string(), "5/6/2024".to_string()],
            ..Default::default()
        };

        let outcome = upload(&mut sink, &decklists(), date(), &ProgressBar::hidden());

        match outcome {
            UploadOutcome::Uploaded { worksheet, count } => {
                assert_eq!(worksheet, "5/6/2024 (2)");
                assert_eq!(count, 2);
            }
            other => panic!("expected upload, got {:?}", other),
        }
        assert_eq!(
            sink.added,
            vec![("5/6/2024 (2)".to_string(), 2, WORKSHEET_ROWS, WORKSHEET_COLS)]
        );
        assert_eq!(
            sink.cells,
            vec![
                (1, 1, "Jo Smith".to_string()),
                (2, 1, "4 Lightning Bolt\nSIDEBOARD\n2 Island".to_string()),
                (1, 2, "Sam Lee".to_string()),
                (2, 2, "4 Karn Liberated\nSIDEBOARD\n".to_string()),
            ]
        );
        assert_eq!(sink.aligned, Some(1..=26));
    }

    #[test]
    fn test_upload_empty_batch_still_creates_tab() {
        let mut sink = Recorder::default();
        let outcome = upload(&mut sink, &[], date(), &ProgressBar::hidden());

        assert!(outcome.is_success());
        assert_eq!(sink.added.len(), 1);
        assert!(sink.cells.is_empty());
        assert!(sink.aligned.is_some());
    }

    #[test]
    fn test_sink_failure_stops_upload() {
        let mut sink = Recorder {
            fail_on_cell: Some(2),
            ..Default::default()
        };

        let outcome = upload(&mut sink, &decklists(), date(), &ProgressBar::hidden());

        assert!(matches!(
            outcome,
            UploadOutcome::SinkFailed(SinkError::Api { status: 429, .. })
        ));
        assert_eq!(sink.cells.len(), 2);
        assert!(sink.aligned.is_none());
    }
}
