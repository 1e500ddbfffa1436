use anyhow::{Context, Result};
use serde::Serialize;

use crate::prospects::models::Prospect;

/// File name offered to the browser for the CSV download.
pub const EXPORT_FILE_NAME: &str = "linkedin_prospects.csv";

/// One CSV row per prospect; follow-ups are flattened into three columns.
#[derive(Debug, Serialize)]
struct ProspectCsvRow<'a> {
    name: &'a str,
    title: &'a str,
    company: &'a str,
    location: &'a str,
    profile_url: &'a str,
    email_template: &'a str,
    follow_up_positive: &'a str,
    follow_up_negative: &'a str,
    follow_up_no_response: &'a str,
}

impl<'a> From<&'a Prospect> for ProspectCsvRow<'a> {
    fn from(p: &'a Prospect) -> Self {
        Self {
            name: &p.name,
            title: &p.title,
            company: &p.company,
            location: &p.location,
            profile_url: &p.profile_url,
            email_template: &p.email_template,
            follow_up_positive: &p.follow_up_templates.positive,
            follow_up_negative: &p.follow_up_templates.negative,
            follow_up_no_response: &p.follow_up_templates.no_response,
        }
    }
}

/// Serializes prospects to UTF-8 CSV with a header row.
pub fn prospects_to_csv(prospects: &[Prospect]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for prospect in prospects {
        writer
            .serialize(ProspectCsvRow::from(prospect))
            .with_context(|| format!("Failed to write CSV row for {}", prospect.name))?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV export: {}", e.error()))
}
