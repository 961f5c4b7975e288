//! Export rankings as CSV, TSV or JSON.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;
use crate::ranking::RankingEntry;

/// Output format for ranking exports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One exported ranking line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRow<'a> {
    pub rank: usize,
    pub artwork_id: &'a str,
    pub title: &'a str,
    pub artist: &'a str,
    pub average_rating: f64,
    pub evaluation_count: usize,
}

/// Flatten ranking entries into numbered rows.
pub fn ranking_rows(entries: &[RankingEntry]) -> Vec<RankingRow<'_>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| RankingRow {
            rank: i + 1,
            artwork_id: &entry.artwork.id,
            title: &entry.artwork.title,
            artist: &entry.artist.name,
            average_rating: entry.average_rating,
            evaluation_count: entry.evaluation_count,
        })
        .collect()
}

/// Write `entries` to `writer` in `format`.
pub fn write_rankings<W: Write>(
    entries: &[RankingEntry],
    format: ExportFormat,
    writer: W,
) -> Result<()> {
    let rows = ranking_rows(entries);

    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(writer, &rows)?;
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let delimiter = if format == ExportFormat::Tsv { b'\t' } else { b',' };
            let mut csv_writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(writer);
            for row in &rows {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush().map_err(csv::Error::from)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Artist, ArtistDraft, Artwork, ArtworkDraft, Dimensions};

    fn entry(title: &str, average_rating: f64, evaluation_count: usize) -> RankingEntry {
        let artist = Artist::from_draft(ArtistDraft::new("Alfredo Volpi"));
        let artwork = Artwork::from_draft(
            ArtworkDraft::new(title, &artist.id).with_dimensions(Dimensions::new(1.0, 1.0)),
        );
        RankingEntry {
            artwork,
            artist,
            average_rating,
            evaluation_count,
        }
    }

    #[test]
    fn test_csv_has_header_and_ranks() {
        let entries = vec![entry("Fachada", 8.5, 2), entry("Bandeiras", 7.0, 1)];
        let mut out = Vec::new();
        write_rankings(&entries, ExportFormat::Csv, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "rank,artwork_id,title,artist,average_rating,evaluation_count"
        );
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].contains(",Fachada,Alfredo Volpi,8.5,2"));
        assert!(lines[2].starts_with("2,"));
    }

    #[test]
    fn test_tsv_uses_tabs() {
        let mut out = Vec::new();
        write_rankings(&[entry("Fachada", 9.0, 1)], ExportFormat::Tsv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().next().unwrap().contains("rank\tartwork_id"));
    }

    #[test]
    fn test_json_rows() {
        let mut out = Vec::new();
        write_rankings(&[entry("Fachada", 9.0, 3)], ExportFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["rank"], 1);
        assert_eq!(value[0]["evaluation_count"], 3);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("TSV".parse::<ExportFormat>().unwrap(), ExportFormat::Tsv);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }
}
