use records::models::{Discipline, RaceResult};

use crate::error::ExtractionError;
use crate::extractors;
use crate::fragment::{Fragment, parse_document};
use crate::report::{ParseReport, Parsed};

const ROW: &str = "#events-info-results > .tbody > .table-row";
const COLUMNS: &str = ".g-row > .g-row > div";
const ATHLETE_NAME: &str = ".athlete-name";
const NATION: &str = ".country__name-short";

/// Rows with fewer columns than this are not result lines.
const MIN_COLUMNS: usize = 7;

/// Fixed column positions of one results table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub rank: usize,
    pub name: usize,
    pub nation: usize,
    pub run1: Option<usize>,
    pub run2: Option<usize>,
    pub total: usize,
    pub diff: usize,
    pub fis_points: usize,
    pub cup_points: usize,
}

impl ColumnLayout {
    pub const TWO_RUNS: Self = Self {
        rank: 0,
        name: 3,
        nation: 5,
        run1: Some(6),
        run2: Some(7),
        total: 8,
        diff: 9,
        fis_points: 10,
        cup_points: 11,
    };

    pub const SINGLE_RUN: Self = Self {
        rank: 0,
        name: 3,
        nation: 5,
        run1: None,
        run2: None,
        total: 6,
        diff: 7,
        fis_points: 8,
        cup_points: 9,
    };

    pub fn for_discipline(discipline: Discipline) -> Self {
        if discipline.has_two_runs() {
            Self::TWO_RUNS
        } else {
            Self::SINGLE_RUN
        }
    }
}

/// Parses a race results page.
///
/// `None` when the table has fewer than two rows, which is how the site
/// shows results that are not published yet.
pub fn parse_results(html: &str, discipline: Discipline) -> Option<Parsed<RaceResult>> {
    let document = parse_document(html);
    let rows = match document.root_element().select_all(ROW) {
        Ok(rows) => rows,
        Err(e) => {
            let mut report = ParseReport::default();
            report.skip("result", 0, e);
            return Some(Parsed {
                items: Vec::new(),
                report,
            });
        }
    };

    if rows.len() < 2 {
        return None;
    }

    let layout = ColumnLayout::for_discipline(discipline);
    let mut parsed = Parsed::default();

    for (index, row) in rows.iter().enumerate() {
        let columns = match row.select_all(COLUMNS) {
            Ok(columns) => columns,
            Err(e) => {
                parsed.report.skip("result", index, e);
                continue;
            }
        };
        if columns.len() < MIN_COLUMNS {
            continue;
        }

        match parse_result_row(row, &columns, &layout) {
            Ok(result) => parsed.items.push(result),
            Err(e) => parsed.report.skip("result", index, e),
        }
    }

    Some(parsed)
}

pub fn parse_result_row<F: Fragment>(
    row: &F,
    columns: &[F],
    layout: &ColumnLayout,
) -> Result<RaceResult, ExtractionError> {
    let column = |index: usize| columns.get(index).ok_or(ExtractionError::MissingColumn(index));

    let href = row.require_attribute("href")?;
    let athlete_id = extractors::competitor_id(&href)
        .ok_or_else(|| ExtractionError::invalid("competitor link", href.as_str()))?;

    let rank_text = column(layout.rank)?.text_content();
    let rank: u32 = rank_text
        .parse()
        .map_err(|_| ExtractionError::invalid("rank", rank_text.as_str()))?;

    let name = column(layout.name)?.require_text(ATHLETE_NAME)?;
    let nation = column(layout.nation)?.require_text(NATION)?;

    let run1 = layout
        .run1
        .map(|i| column(i).map(|c| c.text_content()))
        .transpose()?;
    let run2 = layout
        .run2
        .map(|i| column(i).map(|c| c.text_content()))
        .transpose()?;

    let total = column(layout.total)?.text_content();
    let diff = column(layout.diff)?.text_content();

    // Points columns are blank until the race is scored; blank reads as zero.
    let fis_points = parse_or_zero::<f64>("fis points", &column(layout.fis_points)?.text_content())?;
    let cup_points = if columns.len() > 9 {
        Some(parse_or_zero::<u32>(
            "cup points",
            &column(layout.cup_points)?.text_content(),
        )?)
    } else {
        None
    };

    Ok(RaceResult {
        athlete_id,
        rank,
        name,
        nation,
        run1,
        run2,
        total,
        diff,
        fis_points,
        cup_points,
    })
}

fn parse_or_zero<T>(field: &'static str, text: &str) -> Result<T, ExtractionError>
where
    T: std::str::FromStr + Default,
{
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse().map_err(|_| ExtractionError::invalid(field, text))
}
