use catalog_tools::model::{Row, Table};

#[test]
fn table_rows_span_the_header() {
    let table = Table::new(
        vec!["Variant SKU".into(), "Variant Price".into(), "Title".into()],
        vec![
            Row::new(0, vec!["A".into()]),
            Row::new(1, vec!["B".into(), "2".into(), "Zed".into(), "extra".into()]),
        ],
    );

    assert_eq!(table.rows[0].values, ["A", "", ""]);
    assert_eq!(table.rows[1].values, ["B", "2", "Zed"]);
    assert_eq!(table.rows[0].get(2), "");
}

#[test]
#[should_panic]
fn reading_past_the_row_width_panics() {
    let row = Row::new(0, vec!["A".into(), "1".into()]);

    let _ = row.get(2);
}
