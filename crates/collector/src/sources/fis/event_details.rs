use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use records::models::{Broadcaster, Discipline, Gender, Race, RaceDate, Run, TechnicalDelegate};
use tracing::warn;

use crate::error::{CollectorError, ExtractionError};
use crate::extractors;
use crate::fragment::{Fragment, parse_document};
use crate::report::{ParseReport, Parsed};

const RACE_ROW: &str = "#eventdetailscontent > .table-row";
const NO_COMPETITION: &str = "No competition found";

const CODEX_LINK: &str = ".link_theme_dark";
const CODEX_LINK_TEXT: &str = ".link__text";
const CODEX_COLUMN: &str = ".g-md-2";
const DATE: &str = ".timezone-date";
const TIME: &str = ".timezone-time";
const DISCIPLINE: &str = ".g-lg-5 .clip";
const GENDER_ITEM: &str = ".gender__item";
const WOMEN_CLASS: &str = "gender__item_l";
const RUNS_LINK: &str = "a.hidden-xs";
const RUN_ROW: &str = ".split-row_bordered .split-row__item";
const RUN_INFO: &str = ".g-row";
const RUN_HEADER: &str = ".g-xs-24";
const RUN_NUMBER: &str = ".split-row__item > .g-row > .g-lg-4";
const RUN_STATUS: &str = ".g-lg-5";
const RUN_INFO_TEXT: &str = ".g-lg-7";
const LIVE_TIMING: &str = r#"a[href*="live.fis-ski.com"]"#;

const SECTION: &str = "section";
const DELEGATE_HEADING: &str = "Technical Delegate";
const DELEGATE_ROW: &str = ".table-row";
const DELEGATE_COLUMNS: &str = ".g-xs-24 > div";
const NATION: &str = ".country__name-short";

const BROADCASTER: &str = ".broadcaster";
const BROADCASTER_COUNTRIES: &str = ".broadcaster-countries";
const BROADCASTER_LINK: &str = ".broadcaster-link";

const DOCUMENT_ITEM: &str = ".drop-btn__item";

/// Everything read off an event-details page before results are attached.
#[derive(Debug, Clone, Default)]
pub struct EventPage {
    pub races: Vec<Race>,
    pub technical_delegates: Vec<TechnicalDelegate>,
    pub broadcasters: Vec<Broadcaster>,
    pub documents: BTreeMap<String, String>,
    pub report: ParseReport,
}

pub fn parse_event_page(html: &str, event_id: &str) -> Result<EventPage, CollectorError> {
    let document = parse_document(html);
    let root = document.root_element();

    let race_rows = root.select_all(RACE_ROW)?;
    if race_rows.len() == 1 && race_rows[0].text_content() == NO_COMPETITION {
        return Err(CollectorError::NotFound(event_id.to_string()));
    }

    let races = Parsed::from_rows("race", race_rows, parse_race);
    let delegates = parse_technical_delegates(&root)?;
    let broadcasters = parse_broadcasters(&root)?;
    let documents = parse_documents(&root)?;

    let mut report = races.report;
    report.merge(delegates.report);
    report.merge(broadcasters.report);

    Ok(EventPage {
        races: races.items,
        technical_delegates: delegates.items,
        broadcasters: broadcasters.items,
        documents,
        report,
    })
}

pub fn parse_race<F: Fragment>(row: &F) -> Result<Race, ExtractionError> {
    let codex = match row.select_one(CODEX_LINK)? {
        Some(link) => link.require_text(CODEX_LINK_TEXT)?,
        None => row.require_text(CODEX_COLUMN)?,
    };

    let date = parse_race_date(row)?;

    let discipline_label = row.optional_text(DISCIPLINE)?.unwrap_or_default();
    let discipline = Discipline::from_label(&discipline_label)
        .ok_or_else(|| ExtractionError::UnknownDiscipline(discipline_label.clone()))?;
    let is_training = discipline.is_training();

    let gender = match row.select_one(GENDER_ITEM)? {
        Some(item) if item.has_class(WOMEN_CLASS) => Gender::Women,
        _ => Gender::Men,
    };

    let runs_link = row.select_one(RUNS_LINK)?;
    let race_id = runs_link
        .as_ref()
        .and_then(|link| link.attribute("href"))
        .and_then(|href| extractors::race_id(&href));
    let runs = match (&runs_link, &race_id) {
        (Some(link), Some(_)) => parse_runs(link)?,
        _ => Vec::new(),
    };

    let live_timing_url = row
        .select_one(LIVE_TIMING)?
        .and_then(|link| link.attribute("href"));

    Ok(Race {
        race_id,
        codex,
        date,
        discipline,
        is_training,
        gender,
        runs,
        has_live_timing: live_timing_url.is_some(),
        live_timing_url,
        results: None,
    })
}

fn parse_race_date<F: Fragment>(row: &F) -> Result<RaceDate, ExtractionError> {
    let date_el = row.require(DATE)?;
    let raw_date = date_el.require_attribute("data-date")?;
    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| ExtractionError::invalid("race date", raw_date.as_str()))?;

    match row.select_one(TIME)? {
        Some(time_el) => {
            let time = parse_time(&time_el.require_attribute("data-time")?)?;
            Ok(RaceDate::DateTime(date.and_time(time)))
        }
        None => Ok(RaceDate::Date(date)),
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, ExtractionError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| ExtractionError::invalid("time", raw))
}

/// Sub-rows of the runs block. Header rows and rows without a start time
/// are not runs.
fn parse_runs<F: Fragment>(link: &F) -> Result<Vec<Run>, ExtractionError> {
    let mut runs = Vec::new();

    for run_row in link.select_all(RUN_ROW)? {
        let Some(info) = run_row.select_one(RUN_INFO)? else {
            continue;
        };
        if run_row.exists(RUN_HEADER)? {
            continue;
        }
        let Some(time_el) = info.select_one(TIME)? else {
            continue;
        };

        let label = run_row.optional_text(RUN_NUMBER)?.unwrap_or_default();
        let Some(number) = extractors::run_number(&label) else {
            warn!("Dropping run with unreadable ordinal '{}'", label);
            continue;
        };
        let time = match time_el.require_attribute("data-time").and_then(|raw| parse_time(&raw)) {
            Ok(time) => time,
            Err(e) => {
                warn!("Dropping run {}: {}", number, e);
                continue;
            }
        };

        runs.push(Run {
            number,
            time,
            status: info.optional_text(RUN_STATUS)?,
            info: info.optional_text(RUN_INFO_TEXT)?,
        });
    }

    Ok(runs)
}

/// Rows of the innermost sections headed "Technical Delegate".
pub fn parse_technical_delegates<F: Fragment>(
    root: &F,
) -> Result<Parsed<TechnicalDelegate>, ExtractionError> {
    let mut rows = Vec::new();
    for section in root.select_all(SECTION)? {
        if !section.text_content().contains(DELEGATE_HEADING) {
            continue;
        }
        let has_inner_match = section
            .select_all(SECTION)?
            .iter()
            .any(|inner| inner.text_content().contains(DELEGATE_HEADING));
        if has_inner_match {
            continue;
        }
        rows.extend(section.select_all(DELEGATE_ROW)?);
    }

    let mut parsed = Parsed::default();
    for (index, row) in rows.iter().enumerate() {
        let columns = row.select_all(DELEGATE_COLUMNS)?;
        if columns.len() < 4 {
            continue;
        }
        match columns[2].require_text(NATION) {
            Ok(nation) => parsed.items.push(TechnicalDelegate {
                codex: columns[0].text_content(),
                name: columns[1].text_content(),
                nation,
                td_id: columns[3].text_content(),
            }),
            Err(e) => parsed.report.skip("technical delegate", index, e),
        }
    }

    Ok(parsed)
}

pub fn parse_broadcasters<F: Fragment>(root: &F) -> Result<Parsed<Broadcaster>, ExtractionError> {
    Ok(Parsed::from_rows(
        "broadcaster",
        root.select_all(BROADCASTER)?,
        parse_broadcaster,
    ))
}

fn parse_broadcaster<F: Fragment>(element: &F) -> Result<Broadcaster, ExtractionError> {
    let countries = element
        .require_text(BROADCASTER_COUNTRIES)?
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();

    let link = element.require(BROADCASTER_LINK)?;
    let logo_url = link.select_one("img")?.and_then(|img| img.attribute("src"));

    Ok(Broadcaster {
        name: link.text_content(),
        countries,
        url: link.attribute("href"),
        logo_url,
    })
}

pub fn parse_documents<F: Fragment>(root: &F) -> Result<BTreeMap<String, String>, ExtractionError> {
    let mut documents = BTreeMap::new();

    for item in root.select_all(DOCUMENT_ITEM)? {
        let (Some(name_el), Some(link_el)) = (item.select_one("span")?, item.select_one("a")?)
        else {
            continue;
        };
        let Some(href) = link_el.attribute("href") else {
            continue;
        };
        documents.insert(extractors::strip_size_annotation(&name_el.text_content()), href);
    }

    Ok(documents)
}
