//! Content store backing the reference Count/Page service
//!
//! The store answers three questions: does a taxonomy exist, does a term
//! exist within it, and which published items carry the term (newest first).

use crate::domain::{ExporterError, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Status value of items visible to the export
pub const PUBLISHED: &str = "publish";

/// A taxonomy term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub taxonomy: String,
    pub name: String,
}

/// A content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,

    /// Public address; items without one are left out of page results
    #[serde(default)]
    pub permalink: Option<String>,

    /// Publication time (RFC 3339)
    pub date: DateTime<FixedOffset>,

    #[serde(default = "default_status")]
    pub status: String,

    /// Ids of the terms attached to this item
    #[serde(default)]
    pub terms: Vec<u64>,
}

fn default_status() -> String {
    PUBLISHED.to_string()
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PUBLISHED
    }
}

/// Read access to taxonomies, terms and items
pub trait ContentStore: Send + Sync {
    fn taxonomy_exists(&self, taxonomy: &str) -> bool;

    fn term(&self, taxonomy: &str, term_id: u64) -> Option<Term>;

    /// Published items tagged with the term, newest first
    ///
    /// Items with equal dates keep their stored order.
    fn published_posts(&self, term_id: u64) -> Vec<Post>;
}

/// JSON fixture layout: `{taxonomies, terms, posts}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFixture {
    #[serde(default)]
    pub taxonomies: Vec<String>,
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    taxonomies: HashSet<String>,
    terms: Vec<Term>,
    posts: Vec<Post>,
}

impl InMemoryContentStore {
    pub fn new(fixture: ContentFixture) -> Self {
        Self {
            taxonomies: fixture.taxonomies.into_iter().collect(),
            terms: fixture.terms,
            posts: fixture.posts,
        }
    }

    /// Parse a JSON fixture
    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: ContentFixture = serde_json::from_str(json)?;
        Ok(Self::new(fixture))
    }

    /// Load a JSON fixture from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExporterError::Configuration(format!(
                "Failed to read content file {}: {e}",
                path.display()
            ))
        })?;
        let store = Self::from_json(&contents)?;

        tracing::info!(
            path = %path.display(),
            taxonomies = store.taxonomies.len(),
            terms = store.terms.len(),
            posts = store.posts.len(),
            "Loaded content fixture"
        );
        Ok(store)
    }
}

impl ContentStore for InMemoryContentStore {
    fn taxonomy_exists(&self, taxonomy: &str) -> bool {
        self.taxonomies.contains(taxonomy)
    }

    fn term(&self, taxonomy: &str, term_id: u64) -> Option<Term> {
        self.terms
            .iter()
            .find(|t| t.id == term_id && t.taxonomy == taxonomy)
            .cloned()
    }

    fn published_posts(&self, term_id: u64) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| p.is_published() && p.terms.contains(&term_id))
            .cloned()
            .collect();
        // sort_by is stable, so equal dates keep fixture order
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }
}
