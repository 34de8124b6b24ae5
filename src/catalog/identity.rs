use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable identifier for a catalog entry (e.g., `strategy-xml`).
///
/// Slugs key the registry and appear verbatim in reports and on the command
/// line, so they are compared byte-for-byte.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(pub String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Self {
        Slug(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Slug(value.to_string())
    }
}

/// Classic grouping of a design pattern.
///
/// Known variants keep serialization consistent; `Other` preserves forward
/// compatibility with reports that introduce new groupings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PatternFamily {
    Creational,
    Structural,
    Behavioral,
    Other(String),
}

impl Serialize for PatternFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PatternFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}

impl PatternFamily {
    pub fn as_str(&self) -> &str {
        match self {
            PatternFamily::Creational => "creational",
            PatternFamily::Structural => "structural",
            PatternFamily::Behavioral => "behavioral",
            PatternFamily::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "creational" => PatternFamily::Creational,
            "structural" => PatternFamily::Structural,
            "behavioral" => PatternFamily::Behavioral,
            other => PatternFamily::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_round_trips_known_and_unknown() {
        let known = PatternFamily::Structural;
        let json = serde_json::to_string(&known).unwrap();
        assert_eq!(json.trim_matches('"'), "structural");
        let back: PatternFamily = serde_json::from_str(&json).unwrap();
        assert_eq!(back, known);

        let custom_json = "\"concurrency\"";
        let parsed: PatternFamily = serde_json::from_str(custom_json).unwrap();
        assert_eq!(parsed, PatternFamily::Other("concurrency".to_string()));
        let serialized = serde_json::to_string(&parsed).unwrap();
        assert_eq!(serialized, custom_json);
    }

    #[test]
    fn slug_serializes_as_plain_string() {
        let slug = Slug::from("strategy-xml");
        let serialized = serde_json::to_string(&slug).unwrap();
        assert_eq!(serialized, "\"strategy-xml\"");
        let parsed: Slug = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, slug);
        assert_eq!(parsed.to_string(), "strategy-xml");
    }
}
