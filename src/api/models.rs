use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One problem from the `problemsetQuestionList` query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_frontend_id: String,
    pub title: String,
    pub title_slug: String,
    #[serde(default)]
    pub category_title: Option<String>,
    /// Kept as the raw JSON number so it is exported exactly as received
    #[serde(default)]
    pub frequency: Option<serde_json::Number>,
    #[serde(default)]
    pub is_paid_only: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic_tags: Vec<TopicTag>,
    /// JSON-encoded `{company: [{slug, ...}, ...]}` map, sent as a string
    #[serde(default)]
    pub company_tag_stats: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
}

/// A company tag entry inside `companyTagStats`; only `slug` is required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyTag {
    pub slug: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Decoded `companyTagStats`
pub type CompanyTagStats = HashMap<String, Vec<CompanyTag>>;

impl Question {
    /// Decode `company_tag_stats`; null or empty means no companies
    pub fn company_tag_stats(&self) -> Result<CompanyTagStats, serde_json::Error> {
        match self.company_tag_stats.as_deref().map(str::trim) {
            None | Some("") | Some("null") => Ok(CompanyTagStats::new()),
            Some(raw) => serde_json::from_str(raw),
        }
    }

    /// Deduplicated company-tag slugs across every company bucket
    pub fn company_slugs(&self) -> Result<BTreeSet<String>, serde_json::Error> {
        Ok(self
            .company_tag_stats()?
            .into_values()
            .flatten()
            .map(|tag| tag.slug)
            .collect())
    }

    pub fn topic_slugs(&self) -> impl Iterator<Item = &str> {
        self.topic_tags.iter().map(|tag| tag.slug.as_str())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
