//! Column sort stage.
//!
//! Sorting is stable, and records missing a value for the sort column
//! always land after records that have one, in both directions. The
//! reviews column compares by parsed numeric rating rather than by the raw
//! text, so "10.0(3)" outranks "9.5(3)".

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::restaurant::Restaurant;

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    Name,
    Reviews,
    Cost,
    Cuisine,
    Address,
    Time,
    TimesPicked,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "reviews" => Ok(Self::Reviews),
            "cost" => Ok(Self::Cost),
            // The store column is named "type"; accept both spellings.
            "type" | "cuisine" => Ok(Self::Cuisine),
            "address" => Ok(Self::Address),
            "time" => Ok(Self::Time),
            "times_picked" | "picked" => Ok(Self::TimesPicked),
            other => Err(format!("unknown sort column '{other}'")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// The active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Header-click semantics: a new column starts ascending, clicking the
    /// current column flips the direction.
    pub fn toggle(current: Option<SortConfig>, key: SortKey) -> SortConfig {
        let direction = match current {
            Some(config) if config.key == key && config.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            Some(config) if config.key == key => SortDirection::Asc,
            _ => SortDirection::Asc,
        };
        SortConfig { key, direction }
    }
}

/// The comparable value a record exposes for one column.
enum ColumnValue<'a> {
    Text(&'a str),
    Number(f64),
}

fn column_value(record: &Restaurant, key: SortKey) -> Option<ColumnValue<'_>> {
    match key {
        SortKey::Id => Some(ColumnValue::Text(&record.id)),
        SortKey::Name => Some(ColumnValue::Text(&record.name)),
        SortKey::Reviews => record.rating().map(ColumnValue::Number),
        SortKey::Cost => record.cost.as_deref().map(ColumnValue::Text),
        SortKey::Cuisine => Some(ColumnValue::Text(&record.cuisine)),
        SortKey::Address => Some(ColumnValue::Text(&record.address)),
        SortKey::Time => record.time.as_deref().map(ColumnValue::Text),
        SortKey::TimesPicked => Some(ColumnValue::Number(f64::from(record.times_picked))),
    }
}

fn compare_present(a: &ColumnValue<'_>, b: &ColumnValue<'_>) -> Ordering {
    match (a, b) {
        (ColumnValue::Text(x), ColumnValue::Text(y)) => x.cmp(y),
        (ColumnValue::Number(x), ColumnValue::Number(y)) => x.total_cmp(y),
        // A column is either textual or numeric; mixing cannot happen.
        (ColumnValue::Text(_), ColumnValue::Number(_)) => Ordering::Less,
        (ColumnValue::Number(_), ColumnValue::Text(_)) => Ordering::Greater,
    }
}

/// Compares two records by one column for the given direction.
///
/// Absent values sort after present ones regardless of direction; the
/// direction only applies between two present values.
pub fn compare_records(
    a: &Restaurant,
    b: &Restaurant,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    match (column_value(a, key), column_value(b, key)) {
        (Some(x), Some(y)) => {
            let ordering = compare_present(&x, &y);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort by one column.
pub fn sort_records(records: &mut [Restaurant], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| compare_records(a, b, key, direction));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, reviews: Option<&str>, times_picked: u32) -> Restaurant {
        Restaurant {
            id: name.to_string(),
            name: name.to_string(),
            reviews: reviews.map(String::from),
            cost: None,
            cuisine: "Diner".to_string(),
            address: "1 Main St".to_string(),
            time: None,
            times_picked,
        }
    }

    fn names(records: &[Restaurant]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn toggle_flips_the_same_key_and_resets_a_new_key() {
        let first = SortConfig::toggle(None, SortKey::Name);
        assert_eq!(first.direction, SortDirection::Asc);

        let second = SortConfig::toggle(Some(first), SortKey::Name);
        assert_eq!(second.direction, SortDirection::Desc);

        let third = SortConfig::toggle(Some(second), SortKey::Name);
        assert_eq!(third.direction, SortDirection::Asc);

        let switched = SortConfig::toggle(Some(second), SortKey::Reviews);
        assert_eq!(switched.key, SortKey::Reviews);
        assert_eq!(switched.direction, SortDirection::Asc);
    }

    #[test]
    fn missing_reviews_sort_after_present_in_both_directions() {
        let mut records = vec![
            restaurant("B", None, 0),
            restaurant("A", Some("4.0(5)"), 0),
        ];
        sort_records(&mut records, SortKey::Reviews, SortDirection::Asc);
        assert_eq!(names(&records), ["A", "B"]);

        sort_records(&mut records, SortKey::Reviews, SortDirection::Desc);
        assert_eq!(names(&records), ["A", "B"]);
    }

    #[test]
    fn reviews_compare_numerically_not_lexically() {
        let mut records = vec![
            restaurant("Nine", Some("9.5(3)"), 0),
            restaurant("Ten", Some("10.0(3)"), 0),
        ];
        sort_records(&mut records, SortKey::Reviews, SortDirection::Desc);
        assert_eq!(names(&records), ["Ten", "Nine"]);
    }

    #[test]
    fn times_picked_compares_numerically() {
        let mut records = vec![
            restaurant("Ten", None, 10),
            restaurant("Two", None, 2),
            restaurant("Zero", None, 0),
        ];
        sort_records(&mut records, SortKey::TimesPicked, SortDirection::Asc);
        assert_eq!(names(&records), ["Zero", "Two", "Ten"]);
    }

    #[test]
    fn text_columns_compare_case_sensitively() {
        let mut records = vec![restaurant("apple", None, 0), restaurant("Banana", None, 0)];
        sort_records(&mut records, SortKey::Name, SortDirection::Asc);
        // Uppercase letters order before lowercase in a byte-wise compare.
        assert_eq!(names(&records), ["Banana", "apple"]);
    }

    #[test]
    fn sorting_an_ascending_list_ascending_is_idempotent() {
        let mut records = vec![
            restaurant("A", Some("3.0(1)"), 0),
            restaurant("B", Some("4.0(1)"), 0),
            restaurant("C", None, 0),
        ];
        sort_records(&mut records, SortKey::Reviews, SortDirection::Asc);
        let sorted_once = records.clone();
        sort_records(&mut records, SortKey::Reviews, SortDirection::Asc);
        assert_eq!(records, sorted_once);
    }

    #[test]
    fn descending_is_the_exact_reverse_on_null_free_columns() {
        let mut records = vec![
            restaurant("C", None, 3),
            restaurant("A", None, 1),
            restaurant("B", None, 2),
        ];
        sort_records(&mut records, SortKey::Name, SortDirection::Asc);
        let ascending = records.clone();
        sort_records(&mut records, SortKey::Name, SortDirection::Desc);
        let mut reversed = ascending;
        reversed.reverse();
        assert_eq!(records, reversed);
    }

    #[test]
    fn equal_keys_preserve_original_relative_order() {
        let mut a = restaurant("First", Some("4.0(2)"), 0);
        a.id = "1".to_string();
        let mut b = restaurant("Second", Some("4.0(9)"), 0);
        b.id = "2".to_string();

        let mut records = vec![a, b];
        sort_records(&mut records, SortKey::Reviews, SortDirection::Asc);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "2");
    }

    #[test]
    fn sort_keys_parse_from_column_names() {
        assert_eq!("reviews".parse::<SortKey>().unwrap(), SortKey::Reviews);
        assert_eq!("type".parse::<SortKey>().unwrap(), SortKey::Cuisine);
        assert_eq!(
            "times_picked".parse::<SortKey>().unwrap(),
            SortKey::TimesPicked
        );
        assert!("rating".parse::<SortKey>().is_err());
    }
}
