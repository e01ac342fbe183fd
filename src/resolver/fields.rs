//! The four tracked bilingual fields as a typed value.

use serde::{
    Deserialize,
    Serialize,
};

use super::field::{
    DESCRIPTION_FIELD,
    NAME_FIELD,
};
use super::{
    BilingualSource,
    Record,
};

/// `name` and `description` in both languages.
///
/// Each field keeps exactly what was stored, empty strings included; emptiness
/// only matters to the fallback rules of [`BilingualSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_km: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_km: Option<String>,
}

impl BilingualFields {
    /// Copies the tracked string fields out of a record.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let take = |key: &str| record.get(key).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            name_en: take("name_en"),
            name_km: take("name_km"),
            description_en: take("description_en"),
            description_km: take("description_km"),
        }
    }

    /// Field-wise merge: a non-empty value in `updates` wins, anything else keeps `self`.
    #[must_use]
    pub fn merge(&self, updates: &Self) -> Self {
        fn pick(existing: Option<&String>, update: Option<&String>) -> Option<String> {
            update.filter(|v| !v.is_empty()).or(existing).cloned()
        }

        Self {
            name_en: pick(self.name_en.as_ref(), updates.name_en.as_ref()),
            name_km: pick(self.name_km.as_ref(), updates.name_km.as_ref()),
            description_en: pick(self.description_en.as_ref(), updates.description_en.as_ref()),
            description_km: pick(self.description_km.as_ref(), updates.description_km.as_ref()),
        }
    }

    /// Writes the present fields into `record`, leaving other columns untouched.
    pub fn write_into(&self, record: &mut Record) {
        for (key, value) in self.entries() {
            if let Some(value) = value {
                record.insert(key.to_string(), value.clone().into());
            }
        }
    }

    /// Column name and value of each tracked field, in declaration order.
    fn entries(&self) -> [(&'static str, Option<&String>); 4] {
        [
            ("name_en", self.name_en.as_ref()),
            ("name_km", self.name_km.as_ref()),
            ("description_en", self.description_en.as_ref()),
            ("description_km", self.description_km.as_ref()),
        ]
    }
}

impl BilingualSource for BilingualFields {
    fn text(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .and_then(|(_, value)| value)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Builds the bilingual field set from a submitted form.
///
/// An explicit `{field}_en` / `{field}_km` key wins; otherwise the plain
/// `{field}` key fills both languages so single-language forms still produce a
/// valid record.
#[must_use]
pub fn extract_bilingual_from_form(form: &impl BilingualSource) -> BilingualFields {
    let take = |explicit: &str, plain: &str| {
        form.text(explicit).or_else(|| form.text(plain)).map(str::to_string)
    };

    BilingualFields {
        name_en: take("name_en", NAME_FIELD),
        name_km: take("name_km", NAME_FIELD),
        description_en: take("description_en", DESCRIPTION_FIELD),
        description_km: take("description_km", DESCRIPTION_FIELD),
    }
}

/// Merges a partial edit into the stored fields without clearing untouched languages.
#[must_use]
pub fn merge_bilingual_updates(
    existing: &BilingualFields,
    updates: &BilingualFields,
) -> BilingualFields {
    existing.merge(updates)
}
