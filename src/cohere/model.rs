use serde::{
    Deserialize, Deserializer, Serialize,
    de::{DeserializeOwned, Error as _},
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// On-disk layout of the Cohere CLI config file.
///
/// Decoding is as lenient as the Cohere CLI's own reader: object keys match
/// regardless of ASCII case, and missing keys or `null` values (including a
/// top-level `null`) leave the field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    #[serde(rename = "CurrentURL")]
    pub current_url: String,
    #[serde(rename = "Contexts")]
    pub contexts: HashMap<String, ApiSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiSettings {
    #[serde(rename = "JWT")]
    pub jwt: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl Config {
    pub fn single(url: String, settings: ApiSettings) -> Self {
        Self {
            current_url: url.clone(),
            contexts: HashMap::from([(url, settings)]),
        }
    }

    pub fn current(&self) -> Option<&ApiSettings> {
        self.contexts.get(&self.current_url)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default();

        Ok(Self {
            current_url: take_field(&mut object, "CurrentURL").map_err(D::Error::custom)?,
            contexts: take_field(&mut object, "Contexts").map_err(D::Error::custom)?,
        })
    }
}

impl<'de> Deserialize<'de> for ApiSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default();

        Ok(Self {
            jwt: take_field(&mut object, "JWT").map_err(D::Error::custom)?,
            email: take_field(&mut object, "Email").map_err(D::Error::custom)?,
        })
    }
}

/// Removes `name` from `object`, preferring an exact key over a
/// case-insensitive one. Absent and `null` values decode to the default.
fn take_field<T>(object: &mut Map<String, Value>, name: &str) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    let key = match object.contains_key(name) {
        true => Some(name.to_string()),
        false => object.keys().find(|key| key.eq_ignore_ascii_case(name)).cloned(),
    };

    match key.and_then(|key| object.remove(&key)) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value),
    }
}
