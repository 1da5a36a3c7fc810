use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// data
//  └── list[]
//       ├── id
//       ├── photos[]
//       ├── description
//       ├── region
//       ├── newParam
//       │    ├── bedroomMin
//       │    ├── bathroomMin
//       │    └── minSize
//       ├── agent
//       │    ├── name
//       │    └── avatar
//       └── price
//
// Every field is optional and a value of the wrong JSON type reads as absent,
// so decoding a listing never fails.

#[derive(Debug, Default, Deserialize)]
pub struct ListingsResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<ListingsData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingsData {
    #[serde(default, deserialize_with = "lenient")]
    pub list: Option<Vec<Value>>,
}

impl ListingsResponse {
    /// Reads the envelope; anything that is not an object yields an empty response.
    pub fn from_value(raw: &Value) -> Self {
        Self::deserialize(raw).unwrap_or_default()
    }

    /// The raw listing records, in API order. Empty when `data.list` is absent.
    pub fn listings(&self) -> Vec<RawListing> {
        self.data
            .as_ref()
            .and_then(|d| d.list.as_deref())
            .unwrap_or_default()
            .iter()
            .map(|v| RawListing::deserialize(v).unwrap_or_default())
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub photos: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub new_param: Option<NewParam>,
    #[serde(default, deserialize_with = "lenient")]
    pub agent: Option<Agent>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewParam {
    #[serde(default, deserialize_with = "lenient")]
    pub bedroom_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub bathroom_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub min_size: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Agent {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar: Option<String>,
}

impl RawListing {
    /// First photo, if it is a string.
    pub fn first_photo(&self) -> Option<&str> {
        self.photos
            .as_ref()
            .and_then(|p| p.first())
            .and_then(Value::as_str)
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
