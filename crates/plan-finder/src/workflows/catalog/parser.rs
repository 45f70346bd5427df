use super::{CatalogError, CoverAmount, LimitKind, LimitOption};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(super) struct CatalogRow {
    pub(super) kind: LimitKind,
    pub(super) option: LimitOption,
}

pub(super) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CatalogRow>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<RawRow>() {
        let raw = record?;
        let kind = parse_kind(&raw.kind)?;
        let amount = CoverAmount(raw.amount);
        let label = raw.label.unwrap_or_else(|| amount.label());

        rows.push(CatalogRow {
            kind,
            option: LimitOption { amount, label },
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawRow {
    kind: String,
    amount: u64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    label: Option<String>,
}

fn parse_kind(value: &str) -> Result<LimitKind, CatalogError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "inpatient" => Ok(LimitKind::Inpatient),
        "outpatient" => Ok(LimitKind::Outpatient),
        _ => Err(CatalogError::UnknownKind(value.trim().to_string())),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
