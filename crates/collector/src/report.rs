use tracing::warn;

use crate::error::ExtractionError;

/// Why a row was left out of a parsed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub index: usize,
    pub reason: ExtractionError,
}

/// Diagnostics collected while parsing one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub skipped: Vec<SkippedRow>,
}

impl ParseReport {
    pub fn skip(&mut self, what: &str, index: usize, reason: ExtractionError) {
        warn!("Skipping {} row {}: {}", what, index, reason);
        self.skipped.push(SkippedRow { index, reason });
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn merge(&mut self, other: ParseReport) {
        self.skipped.extend(other.skipped);
    }
}

/// Records parsed from one page, plus what had to be skipped.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub items: Vec<T>,
    pub report: ParseReport,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            report: ParseReport::default(),
        }
    }
}

impl<T> Parsed<T> {
    /// Parses each row independently; a failing row lands in the report.
    pub fn from_rows<R, F>(what: &str, rows: impl IntoIterator<Item = R>, mut parse: F) -> Self
    where
        F: FnMut(&R) -> Result<T, ExtractionError>,
    {
        let mut parsed = Self::default();
        for (index, row) in rows.into_iter().enumerate() {
            match parse(&row) {
                Ok(item) => parsed.items.push(item),
                Err(reason) => parsed.report.skip(what, index, reason),
            }
        }
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_keeps_good_rows_in_order() {
        let parsed = Parsed::from_rows("number", ["1", "x", "3"], |raw| {
            raw.parse::<u32>()
                .map_err(|_| ExtractionError::invalid("number", *raw))
        });

        assert_eq!(parsed.items, vec![1, 3]);
        assert_eq!(parsed.report.skipped.len(), 1);
        assert_eq!(parsed.report.skipped[0].index, 1);
        assert!(!parsed.report.is_clean());
    }
}
