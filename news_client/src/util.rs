use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Id {
    Text(String),
    Number(u64),
}

/// Article identifiers arrive as strings from some feeds and as numbers from others.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Id::deserialize(deserializer)? {
        Id::Text(s) => Ok(s),
        Id::Number(n) => Ok(n.to_string()),
    }
}
