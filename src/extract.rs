//! Per-record derivation of the subject table row.
//!
//! This module holds the pure core of the conversion: [`subject_row`] maps
//! one decoded [`Record`] to one [`SubjectRow`] without touching any I/O,
//! so the derivation rules can be tested in isolation.
//!
//! # Examples
//!
//! ```ignore
//! use marc_subjects::extract::subject_row;
//!
//! let row = subject_row(&record)?;
//! println!("{} published {}", row.bib_id, row.pubyear);
//! # Ok::<(), marc_subjects::ExtractError>(())
//! ```

use lazy_static::lazy_static;
use mrrc::record::{Field, Record};
use mrrc::RecordHelpers;
use regex::Regex;
use serde::Serialize;

use crate::error::{ExtractError, Result};

/// Sentinel written to a cell whose source field is absent or unusable.
pub const NULL_SENTINEL: &str = "NULL";

lazy_static! {
    /// A run of four digits reading as a year between 1000 and 2999.
    static ref YEAR: Regex = Regex::new(r"[12][0-9]{3}").expect("valid year pattern");
}

/// One row of the subject table.
///
/// Field order matches the CSV column order; the serde renames produce the
/// fixed `BIB_ID,PUBYEAR,LCC,LCSH` header. Cells other than `bib_id` hold
/// [`NULL_SENTINEL`] when the source field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectRow {
    /// Record control number from field 001.
    #[serde(rename = "BIB_ID")]
    pub bib_id: String,
    /// Four-digit publication year, or `NULL`.
    #[serde(rename = "PUBYEAR")]
    pub pubyear: String,
    /// Library of Congress call number from field 050, or `NULL`.
    #[serde(rename = "LCC")]
    pub lcc: String,
    /// JSON array of LC subject headings, or `NULL`.
    #[serde(rename = "LCSH")]
    pub lcsh: String,
}

/// Derive the output row for one bibliographic record.
///
/// The record is read-only input; one call produces one row. Publication
/// dates with no year-shaped substring are downgraded to the `NULL`
/// sentinel — that is the only recoverable condition in the pipeline.
///
/// # Errors
///
/// Returns [`ExtractError::MissingControlNumber`] if the record has no 001
/// field, or [`ExtractError::Json`] if the heading list cannot be
/// serialized.
pub fn subject_row(record: &Record) -> Result<SubjectRow> {
    let bib_id = record
        .get_control_field("001")
        .ok_or(ExtractError::MissingControlNumber)?
        .to_string();

    let pubyear = record
        .publication_date()
        .and_then(year_of)
        .map_or_else(|| NULL_SENTINEL.to_string(), ToString::to_string);

    let lcc = record
        .get_field("050")
        .map_or_else(|| NULL_SENTINEL.to_string(), classification);

    let headings = subject_headings(record);
    let lcsh = if headings.is_empty() {
        NULL_SENTINEL.to_string()
    } else {
        serde_json::to_string(&headings)?
    };

    Ok(SubjectRow {
        bib_id,
        pubyear,
        lcc,
        lcsh,
    })
}

/// Collect heading text from every 650 field whose second indicator marks
/// the Library of Congress Subject Headings thesaurus, in encounter order.
#[must_use]
pub fn subject_headings(record: &Record) -> Vec<String> {
    record
        .fields_by_tag("650")
        .filter(|field| field.indicator2 == '0')
        .map(heading_text)
        .collect()
}

/// First four-digit year (1000-2999) in a publication date statement.
fn year_of(statement: &str) -> Option<&str> {
    YEAR.find(statement).map(|m| m.as_str())
}

/// Render the 050 call number as its subfield values joined by spaces.
fn classification(field: &Field) -> String {
    field
        .subfields
        .iter()
        .map(|sf| sf.value.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one subject field as display text.
///
/// Subfields are taken in order up to the first `$0` (linked authority
/// record control number), so the heading never carries an authority URI.
/// Subdivision subfields (v, x, y, z) are joined with ` -- `, anything else
/// with a space; the `$6` linkage subfield is skipped.
fn heading_text(field: &Field) -> String {
    let mut parts: Vec<String> = Vec::new();
    for subfield in &field.subfields {
        match subfield.code {
            '0' => break,
            '6' => continue,
            'v' | 'x' | 'y' | 'z' => parts.push(format!(" -- {}", subfield.value)),
            _ => parts.push(format!(" {}", subfield.value)),
        }
    }
    parts.concat().trim().to_string()
}
