// src/models/mod.rs

//! Domain models for the bookswipe application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod book;
mod config;
mod fetch;
mod swipe;

// Re-export all public types
pub use book::{
    BookDetail, BookSummary, FlatItemsEnvelope, ItemsEnvelope, RawBook, RawBookDetail, WrappedItem,
};
pub use config::{BackendConfig, CatalogConfig, Config, HttpConfig, MessagesConfig};
pub use fetch::{FailureKind, FetchFailure, FetchState};
pub use swipe::SwipeEvent;
