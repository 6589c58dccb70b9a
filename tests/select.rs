use std::collections::BTreeSet;
use std::str::FromStr;

use catalog_tools::ToolError;
use catalog_tools::config::ColumnSettings;
use catalog_tools::model::Table;
use catalog_tools::select::{deduplicate, order_for_display, parse_price};
use bigdecimal::BigDecimal;

const COLUMNS: [&str; 3] = ["Variant SKU", "Variant Price", "Title"];

fn titles(table: &Table) -> Vec<&str> {
    table.rows.iter().map(|row| row.get(2)).collect()
}

fn decimal(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).expect("valid decimal")
}

fn indices(table: &Table) -> Vec<usize> {
    table.original_indices().collect()
}

#[test]
fn prices_ignore_thousands_separators() {
    assert_eq!(parse_price("1,299.50"), Some(decimal("1299.5")));
    assert_eq!(parse_price(" 25 "), Some(decimal("25")));
    assert_eq!(parse_price("1.5e2"), Some(decimal("150")));
    assert_eq!(parse_price("bad"), None);
    assert_eq!(parse_price(""), None);
}

#[test]
fn huge_prices_still_rank() {
    assert_eq!(parse_price("1E+30"), Some(decimal("1E+30")));
    assert!(parse_price("1E+31") > parse_price("9E+30"));

    let table = Table::from_records(
        &COLUMNS,
        [
            ["A", "99999999999999999999999999999", "small"],
            ["A", "1E+30", "large"],
        ],
    );
    let selection = deduplicate(&table, &ColumnSettings::default()).expect("deduplicated");

    assert_eq!(titles(&selection.kept), vec!["large"]);
}

#[test]
fn keeps_highest_price_per_key() {
    let table = Table::from_records(
        &COLUMNS,
        [
            ["A", "10", "Widget"],
            ["A", "25", "Widget"],
            ["B", "bad", "Zed"],
        ],
    );

    let selection = deduplicate(&table, &ColumnSettings::default()).expect("deduplicated");

    assert_eq!(indices(&selection.kept), vec![1, 2]);
    assert_eq!(indices(&selection.removed), vec![0]);
}

#[test]
fn equal_prices_keep_the_earliest_row() {
    let table = Table::from_records(
        &COLUMNS,
        [
            ["A", "1,000", "first"],
            ["A", "1000", "second"],
            ["A", "999", "third"],
        ],
    );

    for _ in 0..3 {
        let selection = deduplicate(&table, &ColumnSettings::default()).expect("deduplicated");
        assert_eq!(titles(&selection.kept), vec!["first"]);
        assert_eq!(indices(&selection.removed), vec![1, 2]);
    }
}

#[test]
fn unparseable_prices_rank_lowest_and_tie_on_position() {
    let table = Table::from_records(
        &COLUMNS,
        [
            ["A", "n/a", "first"],
            ["A", "", "second"],
            ["B", "", "only blank"],
            ["B", "0", "zero"],
        ],
    );

    let selection = deduplicate(&table, &ColumnSettings::default()).expect("deduplicated");

    assert_eq!(titles(&selection.kept), vec!["first", "zero"]);
}

#[test]
fn empty_keys_group_together() {
    let table = Table::from_records(
        &COLUMNS,
        [
            ["", "5", "blank a"],
            ["", "9", "blank b"],
            ["C", "1", "c"],
        ],
    );

    let selection = deduplicate(&table, &ColumnSettings::default()).expect("deduplicated");

    assert_eq!(titles(&selection.kept), vec!["blank b", "c"]);
    assert_eq!(titles(&selection.removed), vec!["blank a"]);
}

#[test]
fn partition_covers_every_row_once() {
    let records: Vec<[String; 3]> = (0..40)
        .map(|idx| {
            [
                format!("SKU-{}", idx % 7),
                if idx % 5 == 0 {
                    "oops".to_string()
                } else {
                    format!("{}", (idx * 13) % 11)
                },
                format!("Item {idx}"),
            ]
        })
        .collect();
    let table = Table::from_records(&COLUMNS, records);

    let selection = deduplicate(&table, &ColumnSettings::default()).expect("deduplicated");

    let kept: BTreeSet<usize> = selection.kept.original_indices().collect();
    let removed: BTreeSet<usize> = selection.removed.original_indices().collect();
    assert!(kept.is_disjoint(&removed));
    let all: BTreeSet<usize> = kept.union(&removed).copied().collect();
    assert_eq!(all, (0..40).collect::<BTreeSet<usize>>());

    let distinct_keys: BTreeSet<&str> = table.rows.iter().map(|row| row.get(0)).collect();
    assert_eq!(selection.kept.len(), distinct_keys.len());

    for kept_row in &selection.kept.rows {
        let kept_price = parse_price(kept_row.get(1));
        for row in table.rows.iter().filter(|row| row.get(0) == kept_row.get(0)) {
            let price = parse_price(row.get(1));
            assert!(kept_price >= price);
            if kept_price == price {
                assert!(kept_row.original_index <= row.original_index);
            }
        }
    }
}

#[test]
fn missing_required_column_is_reported() {
    let table = Table::from_records(&["Variant SKU", "Title"], [["A", "Widget"]]);

    let error = deduplicate(&table, &ColumnSettings::default()).expect_err("missing price");

    assert!(matches!(error, ToolError::MissingColumn(ref column) if column == "Variant Price"));
}

#[test]
fn display_order_sorts_by_title_then_position() {
    let table = Table::from_records(
        &COLUMNS,
        [
            ["A", "1", "Zed"],
            ["B", "1", ""],
            ["C", "1", "Apple"],
            ["D", "1", "Zed"],
        ],
    );

    let (ordered, sorted) = order_for_display(&table, "Title");

    assert!(sorted);
    assert_eq!(indices(&ordered), vec![2, 0, 3, 1]);
}

#[test]
fn display_order_falls_back_to_source_order() {
    let table = Table::from_records(&COLUMNS, [["B", "1", "x"], ["A", "1", "y"]]);
    let reversed = table.with_rows(table.rows.iter().rev().cloned().collect());

    let (ordered, sorted) = order_for_display(&reversed, "Name");

    assert!(!sorted);
    assert_eq!(indices(&ordered), vec![0, 1]);
}
