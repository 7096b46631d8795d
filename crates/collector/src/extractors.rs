//! Small field extractors shared by the page parsers.

use lazy_static::lazy_static;
use records::models::{Discipline, Gender, StatusFlags};
use regex::Regex;

use crate::error::ExtractionError;
use crate::fragment::Fragment;

lazy_static! {
    static ref RACE_ID: Regex = Regex::new(r"raceid=(\d+)").unwrap();
    static ref COMPETITOR_ID: Regex = Regex::new(r"competitorid=(\d+)").unwrap();
    static ref SIZE_SUFFIX: Regex = Regex::new(r"\s*\([^)]*\)\s*$").unwrap();
}

pub const MEN_MARKER: &str = ".gender__item_m";
pub const WOMEN_MARKER: &str = ".gender__item_l";
pub const STATUS_MARKER: &str = ".status__item";
pub const STATUS_SELECTED: &str = "status__item_selected";

/// Every calendar discipline code contained in `text`, in vocabulary order.
///
/// This is a substring scan, not a parse of a delimited list: "GS SL" and
/// "SL/GS" both yield `[Slalom, GiantSlalom]`.
pub fn disciplines(text: &str) -> Vec<Discipline> {
    Discipline::CALENDAR_VOCABULARY
        .into_iter()
        .filter(|d| text.contains(d.code()))
        .collect()
}

pub fn gender<F: Fragment>(element: &F) -> Result<Gender, ExtractionError> {
    let has_men = element.exists(MEN_MARKER)?;
    let has_women = element.exists(WOMEN_MARKER)?;
    Ok(Gender::from_markers(has_men, has_women))
}

/// Maps the four status badges positionally to their flags.
pub fn status<F: Fragment>(element: &F) -> Result<StatusFlags, ExtractionError> {
    let items = element.select_all(STATUS_MARKER)?;
    if items.len() < 4 {
        return Err(ExtractionError::TooFewElements {
            selector: STATUS_MARKER.to_string(),
            expected: 4,
            found: items.len(),
        });
    }

    let mut selected = [false; 4];
    for (flag, item) in selected.iter_mut().zip(&items) {
        *flag = item.has_class(STATUS_SELECTED);
    }
    Ok(StatusFlags::from_positions(selected))
}

pub fn race_id(href: &str) -> Option<String> {
    RACE_ID.captures(href).map(|caps| caps[1].to_string())
}

pub fn competitor_id(href: &str) -> Option<String> {
    COMPETITOR_ID.captures(href).map(|caps| caps[1].to_string())
}

/// "Start List (128 KB)" -> "Start List"
pub fn strip_size_annotation(label: &str) -> String {
    SIZE_SUFFIX.replace(label.trim(), "").into_owned()
}

/// Calendar date text ends with "live" while an event is running.
pub fn split_live_suffix(date: &str) -> (String, bool) {
    match date.trim().strip_suffix("live") {
        Some(rest) => (rest.trim().to_string(), true),
        None => (date.trim().to_string(), false),
    }
}

/// Ordinal label of a run ("1st", "2nd") to its number.
pub fn run_number(label: &str) -> Option<u8> {
    let digits: String = label
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
