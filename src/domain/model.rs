use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// Dataset keys written on commit (same keys the host glue reads)
pub const DATA_LANGVAR: &str = "lv";
pub const DATA_UID: &str = "uid";
pub const DATA_NAME: &str = "name";

// Separator between secondary gloss translations on a suggestion row
pub const GLOSS_SEPARATOR: &str = " — ";

// One translation of a language-variant name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub txt: String,
}

// One candidate returned by the suggest endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub uid: String,
    #[serde(default)]
    pub trans: Vec<Translation>,
}

impl Suggestion {
    /// Primary display name: the first translation, falling back to the
    /// uid when the service sends no translations at all.
    pub fn display_name(&self) -> &str {
        self.trans
            .first()
            .map(|t| t.txt.as_str())
            .unwrap_or(self.uid.as_str())
    }

    /// Secondary translations joined for the gloss row; a blank
    /// placeholder keeps the row height stable when there are none.
    pub fn gloss_line(&self) -> String {
        let glosses: Vec<&str> = self
            .trans
            .iter()
            .skip(1)
            .map(|t| t.txt.as_str())
            .collect();
        if glosses.is_empty() {
            " ".to_string()
        } else {
            glosses.join(GLOSS_SEPARATOR)
        }
    }
}

// The committed choice, readable off the picker after a click
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: String,
    pub uid: String,
    pub display_name: String,
}

impl Selection {
    pub fn of(item: &Suggestion) -> Self {
        Self {
            id: item.id.clone(),
            uid: item.uid.clone(),
            display_name: item.display_name().to_string(),
        }
    }
}

/// Key-value state attached to the picker, mirroring the selection for
/// event consumers (`lv`, `uid`, `name`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset(BTreeMap<String, String>);

impl Dataset {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// The service sends numeric ids; pages treat them as opaque strings.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
