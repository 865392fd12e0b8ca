use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One backend record for one calendar day, as received on the wire.
///
/// Only `date` is read strictly. Every other field is shape-guarded: a value
/// that does not match the expected shape is dropped (lists to empty, scalars
/// to absent) instead of failing the record or the batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecommendation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub regime: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub supporting_factors: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub contradictory_factors: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub signal_accuracy_recent: Option<f64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub events: Vec<RawEconEvent>,
    #[serde(default, deserialize_with = "lenient")]
    pub num_high_impact_events: Option<u32>,
}

/// One scheduled economic release attached to a day.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEconEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub impact: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_eastern: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

fn lenient<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(de)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient::<D, String>(de).map(Option::unwrap_or_default)
}

fn lenient_list<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(de)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
