//! Domain entities for the Projects domain
//!
//! A project is a static catalog record; its image list is the `MediaSet`
//! the carousel runs over. MediaSets are non-empty by construction, which
//! is what keeps every index computation in the state machine total.

use serde::{Deserialize, Deserializer, Serialize};

use folio_common::{Error, Result};

/// Substituted for an image reference that fails to load.
/// The carousel state machine is unaffected by the substitution.
pub const PLACEHOLDER_IMAGE: &str = "/images/project-placeholder.png";

/// Ordered, non-empty list of image references for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MediaSet(Vec<String>);

impl MediaSet {
    /// Create a media set, rejecting the empty list
    pub fn new(images: Vec<String>) -> Result<Self> {
        if images.is_empty() {
            return Err(Error::Validation(
                "A project must have at least one image".to_string(),
            ));
        }
        Ok(Self(images))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        // Non-empty by construction
        false
    }

    /// Image at `index`, taken modulo the set length. Never out of bounds.
    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    /// Image at `index`, or the placeholder when that image failed to
    /// load. Substitution happens at presentation time only; the carousel
    /// state machine never sees it.
    pub fn get_or_placeholder(&self, index: usize, loaded: bool) -> &str {
        if loaded {
            self.get(index)
        } else {
            PLACEHOLDER_IMAGE
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for MediaSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The catalog format accepts a single image or a list
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(String),
            Many(Vec<String>),
        }

        let images = match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(image) => vec![image],
            OneOrMany::Many(images) => images,
        };

        MediaSet::new(images).map_err(serde::de::Error::custom)
    }
}

/// Project catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(rename = "image")]
    pub images: MediaSet,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Validate invariants beyond what deserialization enforces
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation("Project id must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(Error::Validation(format!(
                "Project '{}' must have a title",
                self.id
            )));
        }
        Ok(())
    }
}
