use std::fmt;

use serde::{Deserialize, Serialize};

/// Outlet or person credited for a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub url: String,
}

impl Author {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub author: Author,
    /// Free-form display text such as "20 days ago" or "July 24, 2021". Never parsed.
    pub date: String,
    pub read_time_minutes: u32,
}

/// Opaque reference to a thumbnail, resolved by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A news article or audio story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub url: String,
    pub metadata: Metadata,
    pub image_id: ImageId,
}

impl Post {
    pub fn author_name(&self) -> &str {
        &self.metadata.author.name
    }

    pub fn date(&self) -> &str {
        &self.metadata.date
    }

    pub fn read_time_minutes(&self) -> u32 {
        self.metadata.read_time_minutes
    }
}
