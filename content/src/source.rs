//! The content-access contract: collections, queries, and the backend trait.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored row: column name to JSON value. Every row has a string `id`.
pub type Record = Map<String, Value>;

/// Named collections in the content backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Profiles,
    Experiences,
    Projects,
    BlogPosts,
    YoutubeVideos,
    SocialLinks,
    ContactMessages,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Self::Profiles,
        Self::Experiences,
        Self::Projects,
        Self::BlogPosts,
        Self::YoutubeVideos,
        Self::SocialLinks,
        Self::ContactMessages,
    ];

    /// Table name in the backend.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Profiles => "profiles",
            Self::Experiences => "experiences",
            Self::Projects => "projects",
            Self::BlogPosts => "blog_posts",
            Self::YoutubeVideos => "youtube_videos",
            Self::SocialLinks => "social_links",
            Self::ContactMessages => "contact_messages",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("{collection} record not found: {id}")]
    NotFound { collection: Collection, id: String },
    #[error("invalid fields for {collection}: {reason}")]
    InvalidFields { collection: Collection, reason: String },
    #[error("failed to decode record: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("content backend error: {0}")]
    Backend(String),
}

/// Sort key for [`Query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

/// Equality filters, one sort column and an optional row limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<(String, Value)>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep rows whose `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push((column.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn order_by(mut self, column: &str) -> Self {
        self.order = Some(Order { column: column.to_owned(), descending: false });
        self
    }

    #[must_use]
    pub fn order_by_desc(mut self, column: &str) -> Self {
        self.order = Some(Order { column: column.to_owned(), descending: true });
        self
    }

    #[must_use]
    pub fn limit(mut self, rows: usize) -> Self {
        self.limit = Some(rows);
        self
    }

    /// Whether `record` passes every filter.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.filters
            .iter()
            .all(|(column, value)| record.get(column) == Some(value))
    }
}

/// A content backend: list/get/create/update/delete over named collections.
pub trait ContentSource {
    /// Rows of `collection` matching `query`, in query order.
    ///
    /// # Errors
    ///
    /// Backend failures are reported as [`ContentError::Backend`].
    fn list(&self, collection: Collection, query: &Query) -> Result<Vec<Record>, ContentError>;

    /// A single row by id.
    ///
    /// # Errors
    ///
    /// [`ContentError::NotFound`] when no row has this id.
    fn get(&self, collection: Collection, id: &str) -> Result<Record, ContentError>;

    /// Insert a row and return it as stored (with its assigned id).
    ///
    /// # Errors
    ///
    /// [`ContentError::InvalidFields`] when `fields` is not a JSON object.
    fn create(&mut self, collection: Collection, fields: Value) -> Result<Record, ContentError>;

    /// Merge `fields` into an existing row.
    ///
    /// # Errors
    ///
    /// [`ContentError::NotFound`] or [`ContentError::InvalidFields`].
    fn update(&mut self, collection: Collection, id: &str, fields: Value) -> Result<(), ContentError>;

    /// Remove a row.
    ///
    /// # Errors
    ///
    /// [`ContentError::NotFound`] when no row has this id.
    fn delete(&mut self, collection: Collection, id: &str) -> Result<(), ContentError>;
}

/// List rows and decode them into `T`.
///
/// # Errors
///
/// Propagates the backend error, or [`ContentError::Decode`] if a row does not fit `T`.
pub fn fetch<T: DeserializeOwned>(
    source: &impl ContentSource,
    collection: Collection,
    query: &Query,
) -> Result<Vec<T>, ContentError> {
    source
        .list(collection, query)?
        .into_iter()
        .map(|record| serde_json::from_value(Value::Object(record)).map_err(ContentError::from))
        .collect()
}
