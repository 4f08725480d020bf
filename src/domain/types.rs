//! # Domain Types
//!
//! Typed view of the ranking API payload and the lookups the commands perform on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Net worth in billions USD, kept as the JSON number the API sent so it
/// renders exactly as received (`219` vs `219.5`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Worth(serde_json::Number);

impl Worth {
    pub fn value(&self) -> f64 {
        self.0.as_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for Worth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Worth {
    fn from(v: u64) -> Self {
        Self(v.into())
    }
}

/// A display-only value (`source`, `age`, `image`) shown as the upstream sent it.
/// Strings render bare, `null` or an absent key renders as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Field(serde_json::Value);

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::Null => write!(f, "None"),
            serde_json::Value::String(s) => write!(f, "{s}"),
            other => write!(f, "{other}"),
        }
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self {
        Self(v.into())
    }
}

impl From<u32> for Field {
    fn from(v: u32) -> Self {
        Self(v.into())
    }
}

/// One ranking entry. `name`, `current_worth` and `country` drive the lookups and are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Billionaire {
    pub name: String,
    pub current_worth: Worth,
    pub country: String,
    #[serde(default)]
    pub source: Field,
    #[serde(default)]
    pub age: Field,
    #[serde(default)]
    pub image: Field,
}

/// Top-level payload of `list.php`.
///
/// `ranking` must be a list; records in it that do not decode on their own
/// are skipped instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResponse {
    #[serde(deserialize_with = "lenient_records")]
    pub ranking: Vec<Billionaire>,
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<Billionaire>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value(value) {
            Ok(b) => Some(b),
            Err(e) => {
                tracing::warn!("{}", crate::strings::logs::record_skipped(idx, &e.to_string()));
                None
            }
        })
        .collect())
}

impl RankingResponse {
    /// First `n` records in ranking order (all of them if there are fewer).
    pub fn top(&self, n: usize) -> &[Billionaire] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// First record whose name equals `name` ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Billionaire> {
        let name = name.to_lowercase();
        self.ranking.iter().find(|b| b.name.to_lowercase() == name)
    }

    /// Highest worth among records from `country` (ignoring case).
    /// On a tie the earliest record in ranking order wins.
    pub fn richest_in_country(&self, country: &str) -> Option<&Billionaire> {
        let country = country.to_lowercase();
        self.ranking
            .iter()
            .filter(|b| b.country.to_lowercase() == country)
            .fold(None, |best: Option<&Billionaire>, b| match best {
                Some(top) if top.current_worth.value() >= b.current_worth.value() => Some(top),
                _ => Some(b),
            })
    }
}

#[cfg(test)]
pub(crate) fn sample(name: &str, worth: u64, country: &str) -> Billionaire {
    Billionaire {
        name: name.to_string(),
        current_worth: Worth::from(worth),
        country: country.to_string(),
        source: Field::from("Tesla, SpaceX"),
        age: Field::from(53u32),
        image: Field::from(format!("https://img.example.com/{}.jpg", name.replace(' ', "_")).as_str()),
    }
}
