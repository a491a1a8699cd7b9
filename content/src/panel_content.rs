//! Everything the island panels display, loaded in one pass.

#[cfg(test)]
#[path = "panel_content_test.rs"]
mod panel_content_test;

use log::warn;
use serde::de::DeserializeOwned;

use crate::records::{BlogPost, Experience, Profile, Project, SocialLink, YouTubeVideo};
use crate::source::{Collection, ContentSource, Query, fetch};

/// Shown as the site title when no profile row exists.
pub const FALLBACK_NAME: &str = "Portfolio";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelContent {
    pub profile: Option<Profile>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
    pub videos: Vec<YouTubeVideo>,
    pub social_links: Vec<SocialLink>,
}

impl PanelContent {
    /// Read every collection the panels need.
    ///
    /// A collection that fails to load or decode is logged and left empty;
    /// the rest still load.
    #[must_use]
    pub fn load(source: &impl ContentSource) -> Self {
        let by_order = Query::new().order_by("order_index");
        Self {
            profile: load_or_empty::<Profile>(source, Collection::Profiles, &Query::new().limit(1))
                .into_iter()
                .next(),
            experiences: load_or_empty(source, Collection::Experiences, &by_order),
            projects: load_or_empty(source, Collection::Projects, &by_order),
            blog_posts: load_or_empty(
                source,
                Collection::BlogPosts,
                &Query::new().eq("published", true).order_by_desc("published_at"),
            ),
            videos: load_or_empty(source, Collection::YoutubeVideos, &by_order),
            social_links: load_or_empty(source, Collection::SocialLinks, &by_order),
        }
    }

    /// Items loaded for `collection`. Contact messages are never loaded.
    #[must_use]
    pub fn count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Profiles => usize::from(self.profile.is_some()),
            Collection::Experiences => self.experiences.len(),
            Collection::Projects => self.projects.len(),
            Collection::BlogPosts => self.blog_posts.len(),
            Collection::YoutubeVideos => self.videos.len(),
            Collection::SocialLinks => self.social_links.len(),
            Collection::ContactMessages => 0,
        }
    }

    /// Profile name, or [`FALLBACK_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.profile.as_ref().map_or(FALLBACK_NAME, |p| p.name.as_str())
    }
}

fn load_or_empty<T: DeserializeOwned>(source: &impl ContentSource, collection: Collection, query: &Query) -> Vec<T> {
    match fetch(source, collection, query) {
        Ok(rows) => rows,
        Err(e) => {
            warn!("content: {collection} unavailable, showing none: {e}");
            Vec::new()
        }
    }
}
