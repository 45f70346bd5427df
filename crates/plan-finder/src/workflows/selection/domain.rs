use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::workflows::catalog::CoverAmount;

/// Tri-state answer for an optional rider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiderChoice {
    #[default]
    Unset,
    Yes,
    No,
}

impl RiderChoice {
    pub const fn is_enabled(self) -> bool {
        matches!(self, RiderChoice::Yes)
    }

    /// Accepts the `Yes`/`No` select values as well as boolean checkbox spellings.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "on" | "1" => RiderChoice::Yes,
            "no" | "false" | "off" | "0" => RiderChoice::No,
            _ => RiderChoice::Unset,
        }
    }
}

impl From<bool> for RiderChoice {
    fn from(value: bool) -> Self {
        if value {
            RiderChoice::Yes
        } else {
            RiderChoice::No
        }
    }
}

/// Optional add-on covers. `optical` always mirrors `dental`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Riders {
    #[serde(deserialize_with = "rider_choice")]
    pub maternity: RiderChoice,
    #[serde(deserialize_with = "rider_choice")]
    pub dental: RiderChoice,
    #[serde(deserialize_with = "rider_choice")]
    pub optical: RiderChoice,
}

impl Riders {
    pub(crate) fn set_dental(&mut self, choice: RiderChoice) {
        self.dental = choice;
        self.optical = choice;
    }
}

/// The in-progress application record edited by the selection form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationDraft {
    #[serde(deserialize_with = "optional_number")]
    pub principal_age: Option<i64>,
    #[serde(deserialize_with = "optional_amount")]
    pub inpatient_limit: Option<CoverAmount>,
    #[serde(deserialize_with = "optional_amount")]
    pub outpatient_limit: Option<CoverAmount>,
    pub include_spouse: bool,
    #[serde(deserialize_with = "optional_number")]
    pub spouse_age: Option<i64>,
    pub include_children: bool,
    #[serde(deserialize_with = "optional_number")]
    pub number_of_children: Option<i64>,
    pub riders: Riders,
}

impl ApplicationDraft {
    /// Recomputes derived fields so drafts received from outside the controller stay consistent.
    pub fn normalized(mut self) -> Self {
        let dental = self.riders.dental;
        self.riders.set_dental(dental);
        self
    }
}

/// Identifier for every editable control on the selection form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    PrincipalAge,
    InpatientLimit,
    OutpatientLimit,
    IncludeSpouse,
    SpouseAge,
    IncludeChildren,
    NumberOfChildren,
    Maternity,
    Dental,
    Optical,
}

impl FormField {
    pub const fn key(self) -> &'static str {
        match self {
            FormField::PrincipalAge => "principalAge",
            FormField::InpatientLimit => "inpatientLimit",
            FormField::OutpatientLimit => "outpatientLimit",
            FormField::IncludeSpouse => "includeSpouse",
            FormField::SpouseAge => "spouseAge",
            FormField::IncludeChildren => "includeChildren",
            FormField::NumberOfChildren => "numberOfChildren",
            FormField::Maternity => "maternity",
            FormField::Dental => "dental",
            FormField::Optical => "optical",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw value delivered by a form control, tagged with the kind of control that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldInput {
    Text(String),
    Number(String),
    Checkbox(bool),
    Select(String),
}

impl FieldInput {
    pub(crate) fn as_flag(&self) -> bool {
        match self {
            FieldInput::Checkbox(checked) => *checked,
            FieldInput::Text(raw) | FieldInput::Number(raw) | FieldInput::Select(raw) => matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "true" | "on" | "yes" | "1"
            ),
        }
    }

    pub(crate) fn as_rider(&self) -> RiderChoice {
        match self {
            FieldInput::Checkbox(checked) => RiderChoice::from(*checked),
            FieldInput::Text(raw) | FieldInput::Number(raw) | FieldInput::Select(raw) => {
                RiderChoice::parse(raw)
            }
        }
    }

    pub(crate) fn as_number(&self) -> Option<i64> {
        match self {
            FieldInput::Checkbox(_) => None,
            FieldInput::Text(raw) | FieldInput::Number(raw) | FieldInput::Select(raw) => {
                raw.trim().parse().ok()
            }
        }
    }

    pub(crate) fn as_amount(&self) -> Option<u64> {
        match self {
            FieldInput::Checkbox(_) => None,
            FieldInput::Text(raw) | FieldInput::Number(raw) | FieldInput::Select(raw) => {
                raw.trim().parse().ok()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

fn optional_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(raw)) if raw.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(raw)) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{raw}' is not a whole number"))),
    }
}

fn optional_amount<'de, D>(deserializer: D) -> Result<Option<CoverAmount>, D::Error>
where
    D: Deserializer<'de>,
{
    match optional_number(deserializer)? {
        None => Ok(None),
        Some(value) => u64::try_from(value)
            .map(|amount| Some(CoverAmount(amount)))
            .map_err(|_| serde::de::Error::custom("cover limits cannot be negative")),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChoiceOrFlag {
    Flag(bool),
    Choice(String),
}

fn rider_choice<'de, D>(deserializer: D) -> Result<RiderChoice, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ChoiceOrFlag>::deserialize(deserializer)? {
        None => RiderChoice::Unset,
        Some(ChoiceOrFlag::Flag(flag)) => RiderChoice::from(flag),
        Some(ChoiceOrFlag::Choice(raw)) => RiderChoice::parse(&raw),
    })
}
