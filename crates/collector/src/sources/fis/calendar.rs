use records::models::Competition;

use crate::error::ExtractionError;
use crate::extractors;
use crate::fragment::{Fragment, parse_document};
use crate::report::Parsed;

const ROW: &str = ".table-row";
const EVENT_LINK: &str = r#"a[href*="event-details"]"#;
const DATE: &str = r#"[href*="event-details"] + a"#;
const LOCATION: &str = ".font_md_large";
const COUNTRY: &str = ".country__name-short";
const CATEGORY_CLIPS: &str = ".split-row_bordered .clip";
const GENDER: &str = ".gender";
const CANCELLED: &str = ".cancelled";
const STATUS: &str = ".status";

/// Parses the alpine calendar page. Rows that cannot be read are skipped.
pub fn parse_calendar(html: &str) -> Parsed<Competition> {
    let document = parse_document(html);
    let root = document.root_element();

    match root.select_all(ROW) {
        Ok(rows) => Parsed::from_rows("calendar", rows, parse_competition_row),
        Err(e) => {
            let mut parsed = Parsed::default();
            parsed.report.skip("calendar", 0, e);
            parsed
        }
    }
}

pub fn parse_competition_row<F: Fragment>(row: &F) -> Result<Competition, ExtractionError> {
    let event_id = row.require_attribute("id")?;

    let url = row
        .select_one(EVENT_LINK)?
        .and_then(|link| link.attribute("href"));

    let (date, is_live) = extractors::split_live_suffix(&row.require_text(DATE)?);
    let location = row.require_text(LOCATION)?;
    let country = row.require_text(COUNTRY)?;

    let clips = row.select_all(CATEGORY_CLIPS)?;
    if clips.len() < 2 {
        return Err(ExtractionError::TooFewElements {
            selector: CATEGORY_CLIPS.to_string(),
            expected: 2,
            found: clips.len(),
        });
    }
    let category = clips[0].text_content();
    let discipline = extractors::disciplines(&clips[1].text_content());

    let gender = extractors::gender(&row.require(GENDER)?)?;
    let cancelled = row.exists(CANCELLED)?;
    let status = extractors::status(&row.require(STATUS)?)?;

    Ok(Competition {
        event_id,
        date,
        location,
        country,
        discipline,
        category,
        gender,
        cancelled,
        status,
        url,
        is_live,
    })
}
