//! Panel registry: the fixed set of islands placed on the map.
//!
//! A registry is built once (from the reference layout or a JSON document)
//! and never mutated afterwards. Construction guarantees it is non-empty and
//! that ids are unique, so lookups of "the first panel" and proximity
//! detection always have an answer.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use std::collections::HashSet;

use content::{Collection, PanelContent};
use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Which content an island shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Experience,
    Projects,
    Blog,
    About,
    Videos,
    Contact,
}

impl PanelKind {
    /// Accent colour used for the island header and its nav button.
    #[must_use]
    pub fn accent_color(self) -> &'static str {
        match self {
            Self::Experience => "#2980b9",
            Self::Projects => "#27ae60",
            Self::Blog => "#8e44ad",
            Self::About => "#e67e22",
            Self::Videos => "#c0392b",
            Self::Contact => "#16a085",
        }
    }

    /// Icon name in the site's icon set.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Experience => "briefcase",
            Self::Projects => "folder-open",
            Self::Blog => "book-open",
            Self::About => "user",
            Self::Videos => "youtube",
            Self::Contact => "mail",
        }
    }

    /// Content collections whose rows this island renders.
    #[must_use]
    pub fn collections(self) -> &'static [Collection] {
        match self {
            Self::Experience => &[Collection::Experiences],
            Self::Projects => &[Collection::Projects],
            Self::Blog => &[Collection::BlogPosts],
            Self::About => &[Collection::Profiles],
            Self::Videos => &[Collection::YoutubeVideos],
            Self::Contact => &[Collection::Profiles, Collection::SocialLinks],
        }
    }

    /// Items this island shows for the loaded `content`.
    #[must_use]
    pub fn item_count(self, content: &PanelContent) -> usize {
        self.collections().iter().map(|&c| content.count(c)).sum()
    }
}

/// One island on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    /// Label shown on the island and in the bottom navigation.
    pub name: String,
    /// Top-left corner of the island in canvas space.
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub kind: PanelKind,
}

impl Panel {
    #[must_use]
    pub fn new(id: &str, name: &str, x: f64, y: f64, kind: PanelKind) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), x, y, kind }
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("panel registry must contain at least one panel")]
    Empty,
    #[error("duplicate panel id: {0}")]
    DuplicateId(String),
    #[error("invalid panel registry: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, immutable list of panels. Order matters: it is the nav bar order
/// and breaks proximity ties.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
}

impl PanelRegistry {
    /// Build a registry from an ordered list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Empty`] for an empty list and
    /// [`RegistryError::DuplicateId`] if two panels share an id.
    pub fn new(panels: Vec<Panel>) -> Result<Self, RegistryError> {
        if panels.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for panel in &panels {
            if !seen.insert(panel.id.as_str()) {
                return Err(RegistryError::DuplicateId(panel.id.clone()));
            }
        }
        Ok(Self { panels })
    }

    /// Parse a JSON array of panels.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] on malformed JSON, otherwise the same
    /// errors as [`PanelRegistry::new`].
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let panels: Vec<Panel> = serde_json::from_str(raw)?;
        Self::new(panels)
    }

    /// The six islands of the portfolio map.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            panels: vec![
                Panel::new("experience", "Experience", 400.0, 400.0, PanelKind::Experience),
                Panel::new("projects", "Projects", 1400.0, 800.0, PanelKind::Projects),
                Panel::new("blog", "Blog", 2400.0, 350.0, PanelKind::Blog),
                Panel::new("about", "About Me", 3400.0, 900.0, PanelKind::About),
                Panel::new("videos", "Videos", 4400.0, 400.0, PanelKind::Videos),
                Panel::new("contact", "Contact", 5400.0, 750.0, PanelKind::Contact),
            ],
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// The first panel in registry order; the landing island.
    #[must_use]
    pub fn first(&self) -> &Panel {
        &self.panels[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// True when the registry has no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::reference()
    }
}
