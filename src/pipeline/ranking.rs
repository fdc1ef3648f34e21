use std::fmt;

use tabled::Table;

use super::aggregate::{Track, composite_score};
use crate::{
    types::{ReportRow, ReportTableRow},
    utils,
};

/// Tracks ordered by composite score, saddest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedReport {
    rows: Vec<ReportRow>,
}

impl RankedReport {
    /// All rows, saddest first.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// The top row, or `None` for an empty report.
    pub fn saddest(&self) -> Option<&ReportRow> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keeps only the `n` saddest rows.
    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }

    /// Rows formatted for display: 1-based rank and scores with three decimals.
    ///
    /// # Example
    ///
    /// ```
    /// let report = build(tracks);
    /// println!("{}", Table::new(report.table_rows()));
    /// ```
    pub fn table_rows(&self) -> Vec<ReportTableRow> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| ReportTableRow {
                rank: idx + 1,
                name: row.name.clone(),
                sadness_audio: utils::format_score(row.sadness_audio),
                sadness_lyric: utils::format_score(row.sadness_lyric),
                composite_score: utils::format_score(row.composite_score),
            })
            .collect()
    }
}

impl fmt::Display for RankedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Table::new(self.table_rows()))
    }
}

/// Projects tracks to report rows and sorts them by composite score, descending.
///
/// The sort is stable: tracks with equal scores keep the order in which they
/// arrived. A track that was never aggregated is scored on the fly.
pub fn build(tracks: Vec<Track>) -> RankedReport {
    let mut rows: Vec<ReportRow> = tracks
        .into_iter()
        .map(|track| ReportRow {
            composite_score: track
                .composite_score
                .unwrap_or_else(|| composite_score(track.sadness_audio, track.lyric)),
            sadness_lyric: track.sadness_lyric(),
            sadness_audio: track.sadness_audio,
            name: track.name,
        })
        .collect();

    utils::sort_report_rows(&mut rows);

    RankedReport { rows }
}
