//! Restaurant domain model.

use serde::{Deserialize, Serialize};

/// One restaurant row from the remote store.
///
/// Only `times_picked` is ever mutated by this application; every other
/// column is owned by whoever seeds the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Opaque unique identifier assigned by the remote store.
    pub id: String,
    /// Venue name.
    pub name: String,
    /// Raw review text in the form `"<rating>(<count>)"`, e.g.
    /// `"4.2(1,106)"`. `None` means no reviews.
    pub reviews: Option<String>,
    /// Free-form cost text (e.g. `"$10-20"`). `None` means unknown.
    pub cost: Option<String>,
    /// Cuisine/category. Stored in the `type` column.
    #[serde(rename = "type")]
    pub cuisine: String,
    /// Street address.
    pub address: String,
    /// Free-form hours text. `None` means unknown.
    pub time: Option<String>,
    /// How many times this venue has been picked.
    pub times_picked: u32,
}

impl Restaurant {
    /// Parses the review text, if any. Malformed text reads as no reviews.
    pub fn parsed_reviews(&self) -> Option<Reviews> {
        Reviews::parse(self.reviews.as_deref()?)
    }

    /// Parsed numeric rating, used for the reviews sort column.
    pub fn rating(&self) -> Option<f64> {
        self.parsed_reviews().map(|r| r.rating)
    }
}

/// A parsed review string: a star rating and a review count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reviews {
    /// Star rating, non-negative.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub count: u64,
}

impl Reviews {
    /// Parses `"<float>(<count-with-commas>)"`, e.g. `"4.2(1,106)"`.
    ///
    /// Returns `None` for anything that does not match the format exactly,
    /// including negative ratings and empty counts.
    pub fn parse(text: &str) -> Option<Self> {
        let (rating_part, rest) = text.split_once('(')?;
        let count_part = rest.strip_suffix(')')?;

        let rating: f64 = rating_part.trim().parse().ok()?;
        if !rating.is_finite() || rating < 0.0 {
            return None;
        }

        let digits: String = count_part.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || count_part.trim().is_empty() {
            return None;
        }
        let count: u64 = digits.trim().parse().ok()?;

        Some(Self { rating, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(reviews: Option<&str>) -> Restaurant {
        Restaurant {
            id: "1".to_string(),
            name: "Trattoria".to_string(),
            reviews: reviews.map(String::from),
            cost: None,
            cuisine: "Italian".to_string(),
            address: "1 Main St".to_string(),
            time: None,
            times_picked: 0,
        }
    }

    #[test]
    fn parses_rating_and_comma_separated_count() {
        let parsed = Reviews::parse("4.2(1,106)").unwrap();
        assert_eq!(parsed.rating, 4.2);
        assert_eq!(parsed.count, 1106);
    }

    #[test]
    fn parses_small_count_without_commas() {
        let parsed = Reviews::parse("4.0(5)").unwrap();
        assert_eq!(parsed.rating, 4.0);
        assert_eq!(parsed.count, 5);
    }

    #[test]
    fn rejects_malformed_review_text() {
        assert_eq!(Reviews::parse(""), None);
        assert_eq!(Reviews::parse("4.2"), None);
        assert_eq!(Reviews::parse("4.2()"), None);
        assert_eq!(Reviews::parse("4.2(12"), None);
        assert_eq!(Reviews::parse("(12)"), None);
        assert_eq!(Reviews::parse("-1.0(12)"), None);
        assert_eq!(Reviews::parse("four(12)"), None);
        assert_eq!(Reviews::parse("4.2(many)"), None);
    }

    #[test]
    fn rating_reads_none_for_missing_or_malformed_reviews() {
        assert_eq!(restaurant(None).rating(), None);
        assert_eq!(restaurant(Some("no reviews yet")).rating(), None);
        assert_eq!(restaurant(Some("3.8(42)")).rating(), Some(3.8));
    }

    #[test]
    fn serializes_cuisine_as_type_column() {
        let json = serde_json::to_value(restaurant(None)).unwrap();
        assert_eq!(json["type"], "Italian");
        assert!(json.get("cuisine").is_none());
    }
}
