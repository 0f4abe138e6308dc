//! Multi-key ordering for tables and their elements
//!
//! Two independent phases, both ascending and both stable:
//!
//! Element ordering (within one table)
//!
//!     1. Length key: character length for text, the constant 0 for
//!        numerics. Since a retained text element is never empty, this
//!        groups all numerics ahead of all text.
//!     2. Natural value tie-break: numerics by numeric value, text
//!        lexicographically. A numeric against a text element has no
//!        common numeric interpretation and falls back to comparing
//!        display strings; the length key already separates the two
//!        groups, so the fallback is kept only to make the comparison
//!        total.
//!
//! Table ordering (across the set)
//!
//!     1. Weight sum: numeric value for numerics, character length for
//!        text, summed per table.
//!     2. Element count.
//!     3. Canonical display string (comma-joined natural forms) of the
//!        already-reordered table, lexicographically.
//!
//! Floats are finite by construction, so `total_cmp` agrees with the
//! natural numeric order everywhere it is used here.

use std::cmp::Ordering;

use crate::tables::model::{Element, Table, TableSet};

/// Reorder each table's elements, then reorder the tables themselves.
///
/// Pure and total: the result holds the same elements and tables as the
/// input, only reordered. Ties at every level preserve input order.
pub fn sort(tables: &TableSet) -> TableSet {
    let mut keyed: Vec<(TableKey, Table)> = tables
        .tables()
        .iter()
        .map(|table| table.reordered(compare_elements))
        .map(|table| (TableKey::of(&table), table))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.compare(b));

    TableSet::from_tables(keyed.into_iter().map(|(_, table)| table).collect())
}

/// Element ordering: length key first, natural value second.
pub fn compare_elements(a: &Element, b: &Element) -> Ordering {
    a.length_key()
        .cmp(&b.length_key())
        .then_with(|| compare_values(a, b))
}

/// Natural value tie-break. Mixed numeric/text pairs compare by display
/// string, the documented lexicographic fallback.
fn compare_values(a: &Element, b: &Element) -> Ordering {
    match (a, b) {
        (Element::Integer(x), Element::Integer(y)) => x.cmp(y),
        (Element::Text(x), Element::Text(y)) => x.cmp(y),
        _ => match (a.numeric_value(), b.numeric_value()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}

/// Precomputed compound sort key for one table.
struct TableKey {
    weight: f64,
    count: usize,
    display: String,
}

impl TableKey {
    fn of(table: &Table) -> Self {
        TableKey {
            weight: table.weight_sum(),
            count: table.len(),
            display: table.join_key(),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.count.cmp(&other.count))
            .then_with(|| self.display.cmp(&other.display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> Element {
        Element::Integer(value)
    }

    fn float(value: f64) -> Element {
        Element::Float(value)
    }

    fn text(value: &str) -> Element {
        Element::Text(value.to_string())
    }

    fn table(elements: Vec<Element>) -> Table {
        Table::from_elements(elements).expect("non-empty")
    }

    #[test]
    fn test_numerics_sort_ahead_of_text_by_value() {
        let sorted = sort(&TableSet::from_tables(vec![table(vec![
            text("pear"),
            int(9),
            float(2.5),
            int(3),
        ])]));
        assert_eq!(
            sorted.tables()[0].elements(),
            &[float(2.5), int(3), int(9), text("pear")]
        );
    }

    #[test]
    fn test_text_sorts_by_length_then_lexicographically() {
        let sorted = sort(&TableSet::from_tables(vec![table(vec![
            text("fig"),
            text("apple"),
            text("kiwi"),
            text("date"),
        ])]));
        assert_eq!(
            sorted.tables()[0].elements(),
            &[text("fig"), text("date"), text("kiwi"), text("apple")]
        );
    }

    #[test]
    fn test_tables_sort_by_weight_sum() {
        // Text weight 5 + 6 = 11 beats numeric weight 3 + 5 + 9 = 17.
        let sorted = sort(&TableSet::from_tables(vec![
            table(vec![int(5), int(3), int(9)]),
            table(vec![text("Apple"), text("Banana")]),
        ]));
        assert_eq!(
            sorted.tables()[0].elements(),
            &[text("Apple"), text("Banana")]
        );
        assert_eq!(sorted.tables()[1].elements(), &[int(3), int(5), int(9)]);
    }

    #[test]
    fn test_equal_weight_breaks_on_count() {
        let sorted = sort(&TableSet::from_tables(vec![
            table(vec![int(2), int(2), int(2)]),
            table(vec![int(6)]),
        ]));
        assert_eq!(sorted.tables()[0].elements(), &[int(6)]);
        assert_eq!(sorted.tables()[1].len(), 3);
    }

    #[test]
    fn test_equal_weight_and_count_breaks_on_display() {
        let sorted = sort(&TableSet::from_tables(vec![
            table(vec![int(1), int(5)]),
            table(vec![int(2), int(4)]),
        ]));
        assert_eq!(sorted.tables()[0].elements(), &[int(1), int(5)]);
        assert_eq!(sorted.tables()[1].elements(), &[int(2), int(4)]);
    }

    #[test]
    fn test_full_ties_preserve_input_order() {
        let a = table(vec![int(1), text("aa")]);
        let b = table(vec![int(1), text("aa")]);
        let sorted = sort(&TableSet::from_tables(vec![a.clone(), b.clone()]));
        assert_eq!(sorted.tables(), &[a, b]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let set = TableSet::from_tables(vec![
            table(vec![int(5), int(3), int(9)]),
            table(vec![text("Apple"), text("Banana")]),
            table(vec![float(1.5), text("x")]),
        ]);
        let once = sort(&set);
        assert_eq!(sort(&once), once);
    }

    #[test]
    fn test_cross_type_numeric_comparison() {
        assert_eq!(compare_elements(&int(2), &float(2.5)), Ordering::Less);
        assert_eq!(compare_elements(&float(2.5), &int(2)), Ordering::Greater);
        assert_eq!(compare_elements(&int(2), &float(2.0)), Ordering::Equal);
    }

    #[test]
    fn test_mixed_numeric_text_fallback_is_total() {
        // Unreachable through `sort` (the length key separates the
        // variants) but the comparison itself must never panic.
        assert_eq!(compare_values(&int(5), &text("5")), Ordering::Equal);
        assert_eq!(compare_values(&int(10), &text("2")), Ordering::Less);
    }
}
