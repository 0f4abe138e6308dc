//! Integration tests for the multi-key sort
//!
//! Exercises the full parse-then-sort path on the documented fixtures
//! and the compound tie-breaks across tables.

use tabsort::tables::{parse, sort, Element};

fn int(value: i64) -> Element {
    Element::Integer(value)
}

fn text(value: &str) -> Element {
    Element::Text(value.to_string())
}

fn parse_and_sort(input: &str) -> tabsort::tables::TableSet {
    sort(&parse(input).expect("parse failed"))
}

#[test]
fn test_documented_fixture_orders_text_table_first() {
    // Text weight sum 5 + 6 = 11 beats numeric weight sum 3 + 5 + 9 = 17.
    let sorted = parse_and_sort(r#"[[5, 3, 9], ["Apple", "Banana"]]"#);
    assert_eq!(
        sorted.tables()[0].elements(),
        &[text("Apple"), text("Banana")]
    );
    assert_eq!(sorted.tables()[1].elements(), &[int(3), int(5), int(9)]);
}

#[test]
fn test_elements_sort_numerics_first_then_text_by_length() {
    let sorted = parse_and_sort(r#"[[pear, 10, fig, 2.5, "plum", 3]]"#);
    assert_eq!(
        sorted.tables()[0].elements(),
        &[
            Element::Float(2.5),
            int(3),
            int(10),
            text("fig"),
            text("pear"),
            text("plum"),
        ]
    );
}

#[test]
fn test_negative_weights_sort_ahead() {
    let sorted = parse_and_sort("[[a], [-100, 1]]");
    assert_eq!(sorted.tables()[0].elements(), &[int(-100), int(1)]);
    assert_eq!(sorted.tables()[1].elements(), &[text("a")]);
}

#[test]
fn test_weight_tie_breaks_on_element_count() {
    let sorted = parse_and_sort("[[3, 3], [6]]");
    assert_eq!(sorted.tables()[0].elements(), &[int(6)]);
    assert_eq!(sorted.tables()[1].elements(), &[int(3), int(3)]);
}

#[test]
fn test_weight_and_count_tie_breaks_on_display_string() {
    // Both tables weigh 7 with two elements; "1,6" < "2,5".
    let sorted = parse_and_sort("[[5, 2], [6, 1]]");
    assert_eq!(sorted.tables()[0].elements(), &[int(1), int(6)]);
    assert_eq!(sorted.tables()[1].elements(), &[int(2), int(5)]);
}

#[test]
fn test_sorting_twice_changes_nothing() {
    let once = parse_and_sort(r#"[[5, 3, 9], ["Apple", "Banana"], [2.5, x, -1]]"#);
    assert_eq!(sort(&once), once);
}

#[test]
fn test_sort_preserves_each_table_and_its_elements() {
    let input = r#"[[9, 1, cherry], [2.25], [b, a]]"#;
    let parsed = parse(input).expect("parse failed");
    let sorted = sort(&parsed);

    assert_eq!(sorted.len(), parsed.len());
    let mut expected: Vec<usize> = parsed.tables().iter().map(|t| t.len()).collect();
    let mut actual: Vec<usize> = sorted.tables().iter().map(|t| t.len()).collect();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(actual, expected);

    let total_weight =
        |set: &tabsort::tables::TableSet| -> f64 { set.tables().iter().map(|t| t.weight_sum()).sum() };
    assert_eq!(total_weight(&sorted), total_weight(&parsed));
}
