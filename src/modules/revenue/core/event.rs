// One revenue attribution record, as posted by the tracking script.
//
// Every field is optional on the wire; missing values fall back to their
// defaults. Nothing is validated: negative amounts and empty channels are
// stored as sent.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

pub const UTM_CAMPAIGN: &str = "utm_campaign";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub channel: String,
    pub cta_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    pub page: Option<String>,
    /// A key mapped to `None` was sent as `null`, which is not the same as
    /// the key being absent.
    #[serde(deserialize_with = "null_as_default")]
    pub utm: HashMap<String, Option<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RevenueEvent {
    pub fn utm_campaign(&self) -> Option<&str> {
        self.utm.get(UTM_CAMPAIGN).and_then(|v| v.as_deref())
    }
}
