use serde::Serialize;
use std::fmt;

use super::validation::ValidatedDraft;

/// Ordered parameters sent to the remote plans API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanQuery {
    pairs: Vec<(&'static str, String)>,
}

impl PlanQuery {
    pub fn from_validated(validated: &ValidatedDraft) -> Self {
        let draft = validated.draft();
        let mut pairs = Vec::with_capacity(7);

        // Both are guaranteed present by validation.
        if let Some(age) = draft.principal_age {
            pairs.push(("principalAge", age.to_string()));
        }
        if let Some(limit) = draft.inpatient_limit {
            pairs.push(("inpatientLimit", limit.to_string()));
        }

        if draft.include_spouse {
            if let Some(age) = draft.spouse_age {
                pairs.push(("spouseAge", age.to_string()));
            }
        }
        if draft.include_children {
            if let Some(count) = draft.number_of_children {
                pairs.push(("numberOfKids", count.to_string()));
            }
        }
        if draft.riders.maternity.is_enabled() {
            pairs.push(("maternity", "true".to_string()));
        }
        if draft.riders.dental.is_enabled() {
            pairs.push(("dental", "true".to_string()));
            pairs.push(("optical", "true".to_string()));
        }

        Self { pairs }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl From<&ValidatedDraft> for PlanQuery {
    fn from(validated: &ValidatedDraft) -> Self {
        Self::from_validated(validated)
    }
}

impl fmt::Display for PlanQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
