//! Typed rows for each collection.
//!
//! Nullable columns are `Option`. Timestamps are kept as the backend's ISO
//! strings and default to empty so hand-written fixtures can omit them.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub short_description: Option<String>,
    pub image_url: Option<String>,
    pub resume_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub years_of_experience: Option<u32>,
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub published_at: Option<String>,
    pub author_id: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YouTubeVideo {
    pub id: String,
    pub title: String,
    pub video_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl YouTubeVideo {
    /// The 11-character video id from a `youtube.com` watch or embed URL, or a
    /// `youtu.be` share URL. Other hosts yield `None`.
    #[must_use]
    pub fn video_id(&self) -> Option<&str> {
        let url = self.video_url.as_str();
        let long = url.find(LONG_HOST).map(|at| (at, true));
        let short = url.find(SHORT_HOST).map(|at| (at, false));
        let (at, is_long) = match (long, short) {
            (Some(l), Some(s)) => l.min(s),
            (l, s) => l.or(s)?,
        };

        if !is_long {
            return leading_video_id(&url[at + SHORT_HOST.len()..]);
        }
        let path = &url[at + LONG_HOST.len()..];
        if let Some(rest) = ["embed/", "v/", "e/"].iter().find_map(|prefix| path.strip_prefix(prefix)) {
            return leading_video_id(rest);
        }
        path.rmatch_indices("v=")
            .filter(|&(i, _)| path[..i].ends_with(['?', '&']))
            .find_map(|(i, marker)| leading_video_id(&path[i + marker.len()..]))
    }

    /// Player URL for an iframe, when the id can be extracted.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        self.video_id().map(|id| format!("https://www.youtube.com/embed/{id}"))
    }
}

const LONG_HOST: &str = "youtube.com/";
const SHORT_HOST: &str = "youtu.be/";
const VIDEO_ID_LEN: usize = 11;

/// The first 11 characters of `rest`, if none of them ends the id.
fn leading_video_id(rest: &str) -> Option<&str> {
    let end = rest.char_indices().nth(VIDEO_ID_LEN).map_or(rest.len(), |(i, _)| i);
    let id = &rest[..end];
    let valid = id.chars().count() == VIDEO_ID_LEN
        && id.chars().all(|c| !matches!(c, '"' | '&' | '?' | '/') && !c.is_whitespace());
    valid.then_some(id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
}
