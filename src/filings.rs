//! EDGAR submissions index: the columnar `filings.recent` block turned into one [`Filing`] per
//! entry, plus the archive URLs a filing's documents live at.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;
use url::Url;

use crate::error::ExtractError;

pub const ARCHIVES_BASE_URL: &str = "https://www.sec.gov/Archives/edgar/data/";
pub const FINANCIAL_REPORT_NAME: &str = "Financial_Report.xlsx";

const CACHEABLE_HOSTS: &[&str] = &["www.sec.gov", "data.sec.gov"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filing {
    pub accession_number: String,
    pub form: String,
    pub primary_document: String,
    pub filing_date: Option<NaiveDate>,
    pub report_date: Option<NaiveDate>,
}

impl Filing {
    /// Accession number as it appears in archive paths, without dashes.
    #[must_use]
    pub fn accession_path(&self) -> String {
        self.accession_number.replace('-', "")
    }

    pub fn document_url(&self, cik: &str) -> Result<Url, ExtractError> {
        self.archive_url(cik, &self.primary_document)
    }

    pub fn financial_report_url(&self, cik: &str) -> Result<Url, ExtractError> {
        self.archive_url(cik, FINANCIAL_REPORT_NAME)
    }

    fn archive_url(&self, cik: &str, file_name: &str) -> Result<Url, ExtractError> {
        let base = Url::parse(ARCHIVES_BASE_URL)?;
        let url = base.join(&format!("{cik}/{}/{file_name}", self.accession_path()))?;
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct Submissions {
    filings: FilingsBlock,
}

#[derive(Debug, Deserialize)]
struct FilingsBlock {
    recent: RecentColumns,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentColumns {
    accession_number: Vec<String>,
    form: Vec<String>,
    primary_document: Vec<String>,
    #[serde(default)]
    filing_date: Vec<String>,
    #[serde(default)]
    report_date: Vec<String>,
}

/// Reads a submissions JSON document into rows, keeping the first `limit` when given.
pub fn parse_recent_filings(json: &str, limit: Option<usize>) -> Result<Vec<Filing>, ExtractError> {
    let submissions = serde_json::from_str::<Submissions>(json)?;
    let columns = submissions.filings.recent;

    let count = columns.accession_number.len();
    if columns.form.len() != count || columns.primary_document.len() != count {
        return Err(ExtractError::FilingIndex(format!(
            "column lengths differ: accessionNumber={count}, form={}, primaryDocument={}",
            columns.form.len(),
            columns.primary_document.len()
        )));
    }

    let count = limit.map_or(count, |limit| limit.min(count));
    let filings = (0..count)
        .map(|i| Filing {
            accession_number: columns.accession_number[i].clone(),
            form: columns.form[i].clone(),
            primary_document: columns.primary_document[i].clone(),
            filing_date: parse_date(columns.filing_date.get(i)),
            report_date: parse_date(columns.report_date.get(i)),
        })
        .collect();
    Ok(filings)
}

fn parse_date(value: Option<&String>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Filings whose form type equals `form`, e.g. `10-K`.
pub fn find_filings<'a>(filings: &'a [Filing], form: &'a str) -> impl Iterator<Item = &'a Filing> {
    filings.iter().filter(move |filing| filing.form == form)
}

/// Relative on-disk path for an SEC response, e.g. `Archives/edgar/...` or `submissions/...`.
pub fn cache_relative_path(url: &Url) -> Result<PathBuf, ExtractError> {
    let host = url.host_str().unwrap_or_default();
    if url.scheme() != "https" || !CACHEABLE_HOSTS.contains(&host) {
        return Err(ExtractError::UnsupportedHost(url.to_string()));
    }

    Ok(url
        .path_segments()
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .collect())
}
