//! Swipe event wire format.

use serde::Serialize;

use crate::models::BookSummary;

/// A single accept/reject decision, as posted to the swipe collector.
///
/// Transient: built per swipe, sent once, never stored locally.
#[derive(Debug, Clone, Serialize)]
pub struct SwipeEvent {
    /// Pseudonymous device identifier
    pub user_id: String,

    /// ISBN of the decided book
    pub book_isbn: String,

    /// True for a right swipe ("like")
    pub liked: bool,

    /// Author display name
    pub author: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
}

impl SwipeEvent {
    /// Build an event for a decision on a book.
    pub fn new(user_id: impl Into<String>, book: &BookSummary, liked: bool) -> Self {
        Self {
            user_id: user_id.into(),
            book_isbn: book.isbn.clone(),
            liked,
            author: book.author.clone(),
            title: Some(book.title.clone()),
            cover_image_url: Some(book.cover_image_url.clone()),
        }
    }
}
