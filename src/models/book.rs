//! Book data structures and raw catalog response shapes.

use serde::{Deserialize, Serialize};

use crate::utils::full_size_cover_url;

/// A normalized book as shown on a swipe card or in a list.
///
/// Also used verbatim as a favorites entry; the favorites list is
/// deduplicated by `title`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSummary {
    /// Book title
    pub title: String,

    /// Author display name
    pub author: String,

    /// Full-size cover image URL
    pub cover_image_url: String,

    /// ISBN, the external key for the book
    pub isbn: String,
}

impl BookSummary {
    /// Normalize a raw catalog entry into a summary.
    ///
    /// The catalog returns cover URLs with a thumbnail-size query
    /// parameter; it is stripped to request the full-size image.
    pub fn from_raw(raw: RawBook) -> Self {
        Self {
            title: raw.title,
            author: raw.author,
            cover_image_url: full_size_cover_url(&raw.large_image_url),
            isbn: raw.isbn,
        }
    }
}

/// Full book record as returned by the backend detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookDetail {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub sales_date: String,
    pub isbn: String,
    pub cover_image_url: String,
    pub price: u64,
    pub purchase_url: String,
    pub review_count: u32,
    pub review_average: String,
}

impl From<RawBookDetail> for BookDetail {
    fn from(raw: RawBookDetail) -> Self {
        Self {
            title: raw.title,
            author: raw.author,
            summary: raw.summary,
            publisher: raw.publisher_name,
            sales_date: raw.sales_date,
            isbn: raw.isbn,
            cover_image_url: raw.large_image_url,
            price: raw.item_price,
            purchase_url: raw.item_url,
            review_count: raw.review_count,
            review_average: raw.review_average,
        }
    }
}

/// Raw book entry as it appears inside catalog and recommendation
/// responses.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBook {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(rename = "largeImageUrl", default)]
    pub large_image_url: String,

    #[serde(default)]
    pub isbn: String,
}

/// Response envelope with doubly-nested entries:
/// `{ "Items": [ { "Item": { ... } } ] }`.
///
/// Used by the catalog search and recommendations endpoints.
#[derive(Debug, Deserialize)]
pub struct ItemsEnvelope {
    #[serde(rename = "Items", default)]
    pub items: Vec<WrappedItem>,
}

#[derive(Debug, Deserialize)]
pub struct WrappedItem {
    #[serde(rename = "Item")]
    pub item: RawBook,
}

impl ItemsEnvelope {
    /// Unwrap and normalize every entry.
    pub fn into_books(self) -> Vec<BookSummary> {
        self.items
            .into_iter()
            .map(|wrapped| BookSummary::from_raw(wrapped.item))
            .collect()
    }
}

/// Response envelope with flat entries: `{ "Items": [ { ... } ] }`.
///
/// Used by the server-side favorites endpoint.
#[derive(Debug, Deserialize)]
pub struct FlatItemsEnvelope {
    #[serde(rename = "Items", default)]
    pub items: Vec<RawBook>,
}

impl FlatItemsEnvelope {
    pub fn into_books(self) -> Vec<BookSummary> {
        self.items.into_iter().map(BookSummary::from_raw).collect()
    }
}

/// Raw book detail as returned by `GET /book/{isbn}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBookDetail {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub summary: String,

    #[serde(rename = "publisherName", default)]
    pub publisher_name: String,

    #[serde(rename = "salesDate", default)]
    pub sales_date: String,

    #[serde(default)]
    pub isbn: String,

    #[serde(rename = "largeImageUrl", default)]
    pub large_image_url: String,

    #[serde(rename = "itemPrice", default)]
    pub item_price: u64,

    #[serde(rename = "itemUrl", default)]
    pub item_url: String,

    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,

    #[serde(rename = "reviewAverage", default)]
    pub review_average: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_envelope_maps_entries() {
        let json = r#"{
            "Items": [
                {
                    "Item": {
                        "title": "吾輩は猫である",
                        "author": "夏目漱石",
                        "largeImageUrl": "https://thumbnail.example.com/book.jpg?_ex=120x120",
                        "isbn": "9784101010014"
                    }
                }
            ]
        }"#;

        let envelope: ItemsEnvelope = serde_json::from_str(json).unwrap();
        let books = envelope.into_books();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "吾輩は猫である");
        assert_eq!(
            books[0].cover_image_url,
            "https://thumbnail.example.com/book.jpg"
        );
        assert_eq!(books[0].isbn, "9784101010014");
    }

    #[test]
    fn test_empty_items_is_empty_deck() {
        let envelope: ItemsEnvelope = serde_json::from_str(r#"{ "Items": [] }"#).unwrap();
        assert!(envelope.into_books().is_empty());
    }

    #[test]
    fn test_missing_items_field_defaults_to_empty() {
        let envelope: ItemsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_books().is_empty());
    }

    #[test]
    fn test_flat_envelope_maps_entries() {
        let json = r#"{
            "Items": [
                { "title": "A", "author": "B", "largeImageUrl": "https://img/x.jpg", "isbn": "1" },
                { "title": "C", "author": "D", "largeImageUrl": "https://img/y.jpg", "isbn": "2" }
            ]
        }"#;

        let envelope: FlatItemsEnvelope = serde_json::from_str(json).unwrap();
        let books = envelope.into_books();
        assert_eq!(books.len(), 2);
        assert_eq!(books[1].title, "C");
    }

    #[test]
    fn test_detail_mapping() {
        let json = r#"{
            "title": "坊っちゃん",
            "author": "夏目漱石",
            "summary": "あらすじ",
            "publisherName": "新潮社",
            "salesDate": "2003年04月",
            "isbn": "9784101010036",
            "largeImageUrl": "https://img.example.com/botchan.jpg",
            "itemPrice": 407,
            "itemUrl": "https://books.example.com/botchan",
            "reviewCount": 120,
            "reviewAverage": "4.3"
        }"#;

        let raw: RawBookDetail = serde_json::from_str(json).unwrap();
        let detail = BookDetail::from(raw);

        assert_eq!(detail.publisher, "新潮社");
        assert_eq!(detail.price, 407);
        assert_eq!(detail.review_average, "4.3");
        assert_eq!(detail.purchase_url, "https://books.example.com/botchan");
    }

    #[test]
    fn test_detail_tolerates_missing_fields() {
        let raw: RawBookDetail =
            serde_json::from_str(r#"{ "title": "T", "isbn": "9784000000000" }"#).unwrap();
        let detail = BookDetail::from(raw);

        assert_eq!(detail.title, "T");
        assert_eq!(detail.price, 0);
        assert!(detail.summary.is_empty());
    }
}
