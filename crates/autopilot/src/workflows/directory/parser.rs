use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One connection parsed from an exported connections CSV.
#[derive(Debug)]
pub(crate) struct ConnectionRecord {
    pub(crate) name: String,
    pub(crate) position: String,
    pub(crate) company: String,
    pub(crate) email: Option<String>,
    pub(crate) profile_url: Option<String>,
    pub(crate) connected_on: Option<NaiveDate>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ConnectionRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<ConnectionRow>() {
        let row = record?;
        let name = format!("{} {}", row.first_name.trim(), row.last_name.trim())
            .trim()
            .to_string();
        if name.is_empty() {
            continue;
        }

        records.push(ConnectionRecord {
            name,
            position: row.position.unwrap_or_default(),
            company: row.company.unwrap_or_default(),
            email: row.email,
            profile_url: row.url,
            connected_on: row.connected_on.as_deref().and_then(parse_date),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ConnectionRow {
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "URL", default, deserialize_with = "empty_string_as_none")]
    url: Option<String>,
    #[serde(
        rename = "Email Address",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    email: Option<String>,
    #[serde(rename = "Company", default, deserialize_with = "empty_string_as_none")]
    company: Option<String>,
    #[serde(rename = "Position", default, deserialize_with = "empty_string_as_none")]
    position: Option<String>,
    #[serde(
        rename = "Connected On",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    connected_on: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Connection exports write "06 Aug 2025"; tolerate ISO dates too.
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d %b %Y") {
        return Some(date);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
