//! Core types: comic identifiers, the raw service record and the display-ready comic

use crate::config::LATEST_COMIC;
use serde::{Deserialize, Deserializer, Serialize};

/// Selects which comic to fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ComicId {
    /// The most recent comic
    #[default]
    Latest,
    /// A specific comic by number
    Number(u32),
}

impl ComicId {
    /// Comic number, or `None` for [`ComicId::Latest`]
    pub fn number(&self) -> Option<u32> {
        match self {
            ComicId::Latest => None,
            ComicId::Number(n) => Some(*n),
        }
    }
}

impl From<u32> for ComicId {
    /// [`LATEST_COMIC`] maps to [`ComicId::Latest`], anything else to a number
    fn from(n: u32) -> Self {
        if n == LATEST_COMIC {
            ComicId::Latest
        } else {
            ComicId::Number(n)
        }
    }
}

impl std::fmt::Display for ComicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComicId::Latest => write!(f, "latest"),
            ComicId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Raw comic metadata as returned by the service
///
/// Every field is optional on the wire; missing fields and explicit `null`s
/// decode to their empty value. Day, month and year arrive as separate strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteRecord {
    /// Comic number
    #[serde(deserialize_with = "null_as_default")]
    pub num: i64,
    /// Day of month
    #[serde(deserialize_with = "null_as_default")]
    pub day: String,
    /// Month number
    #[serde(deserialize_with = "null_as_default")]
    pub month: String,
    /// Year
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,
    /// Title
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Title without markup
    #[serde(deserialize_with = "null_as_default")]
    pub safe_title: String,
    /// Alt text shown on hover
    #[serde(deserialize_with = "null_as_default")]
    pub alt: String,
    /// Image URL
    #[serde(deserialize_with = "null_as_default")]
    pub img: String,
    /// External link attached to the comic
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    /// News banner text
    #[serde(deserialize_with = "null_as_default")]
    pub news: String,
    /// Transcript
    #[serde(deserialize_with = "null_as_default")]
    pub transcript: String,
}

/// Decode `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RemoteRecord {
    /// Join year, month and day with `-`
    ///
    /// No calendar validation: the parts are used as given.
    pub fn formatted_date(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }

    /// Project into the display-ready [`Comic`]
    pub fn into_comic(self) -> Comic {
        let date = self.formatted_date();
        Comic {
            title: self.title,
            number: self.num,
            date,
            description: self.alt,
            image: self.img,
        }
    }
}

impl From<RemoteRecord> for Comic {
    fn from(record: RemoteRecord) -> Self {
        record.into_comic()
    }
}

/// Display-ready comic
///
/// Field order is the serialization order of the JSON rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    /// Title
    pub title: String,
    /// Comic number
    pub number: i64,
    /// `year-month-day`
    pub date: String,
    /// Alt text
    pub description: String,
    /// Image URL
    pub image: String,
}
