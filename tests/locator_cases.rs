use filing_tables::{
    ColumnCountStrategy, DocumentNode, Grid, HtmlDocument, build_grid, clean_grid, find_table,
    normalize, resolve_title, split_subtables,
};
use pretty_assertions::assert_eq;

fn grid(rows: &[&[&str]]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect(),
    )
}

#[test]
fn last_title_occurrence_wins() {
    let html = r#"<html><body>
        <p>Consolidated Balance Sheets</p>
        <p>Consolidated Statements of Operations</p>
        <table><tr><td>Revenue</td><td>60,922</td></tr></table>
        <p>Consolidated Balance Sheets</p>
        <table><tr><td>Total assets</td><td>65,728</td></tr></table>
    </body></html>"#;
    let document = HtmlDocument::parse(html);

    let table = find_table(&document.root(), "consolidated balance sheets").expect("table");
    let built = build_grid(&table, ColumnCountStrategy::FirstRow);
    assert_eq!(built, grid(&[&["Total assets", "65,728"]]));
}

#[test]
fn title_skips_blank_and_scale_siblings() {
    let html = "<div><p>Consolidated Balance Sheets</p><p>(in millions)</p>\n<table><tr><td>1</td></tr></table></div>";
    let document = HtmlDocument::parse(html);
    let table = document.root().find_all("table").remove(0);

    let before = table.prev_sibling().expect("newline sibling");
    assert_eq!(before.text(), "\n");
    assert_eq!(
        resolve_title(&table).as_deref(),
        Some("Consolidated Balance Sheets")
    );
}

#[test]
fn locator_reaches_tables_nested_after_the_title() {
    let html = r#"<html><body>
        <div><div><font><b>CONSOLIDATED STATEMENTS OF CASH FLOWS</b></font></div></div>
        <div style="margin"><div><table><tr><td>Net income</td><td>29,760</td></tr></table></div></div>
    </body></html>"#;
    let document = HtmlDocument::parse(html);

    let table = find_table(&document.root(), "Consolidated Statements of Cash Flows")
        .expect("table nested after the title");
    assert_eq!(
        build_grid(&table, ColumnCountStrategy::FirstRow).get(0, 1),
        Some("29,760")
    );
}

#[test]
fn plain_cells_map_verbatim() {
    let html = "<table><tr><td>a</td><td>b</td><td>c</td></tr><tr><td>d</td><td>e</td><td>f</td></tr></table>";
    let document = HtmlDocument::parse(html);
    let table = document.root().find_all("table").remove(0);

    let built = build_grid(&table, ColumnCountStrategy::FirstRow);
    assert_eq!(built.row_count(), 2);
    assert_eq!(built.col_count(), 3);
    assert_eq!(built, grid(&[&["a", "b", "c"], &["d", "e", "f"]]));
}

#[test]
fn full_pipeline_on_merged_header_table() {
    let html = r#"<p>Revenue by Reportable Segments</p><table>
        <tr><td>Segment</td><td>2024</td><td>2023</td></tr>
        <tr><td colspan="3">Compute &amp; Networking</td></tr>
        <tr><td>Data Center</td><td>47,525</td><td>15,005</td></tr>
        <tr><td></td><td></td><td></td></tr>
        <tr><td colspan="3">Graphics</td></tr>
        <tr><td>Gaming</td><td>10,447</td><td>9,067</td></tr>
    </table>"#;
    let document = HtmlDocument::parse(html);
    let table = find_table(&document.root(), "revenue by reportable segments").expect("table");

    let cleaned = clean_grid(&build_grid(&table, ColumnCountStrategy::FirstRow));
    let sections = split_subtables(&cleaned);

    assert_eq!(
        sections.names().collect::<Vec<_>>(),
        vec!["<start>", "Compute & Networking", "Graphics"]
    );
    assert_eq!(
        sections.get("<start>"),
        Some(&grid(&[&["Segment", "2024", "2023"]]))
    );
    assert_eq!(
        sections.get("Graphics"),
        Some(&grid(&[&["Gaming", "10,447", "9,067"]]))
    );
}

#[test]
fn normalization_is_idempotent_over_filing_titles() {
    for title in [
        "CONSOLIDATED BALANCE SHEETS",
        "Consolidated Statements of Shareholders\u{2019} Equity",
        "Note 7 \u{2014} Leases",
        "\u{a0}\n",
    ] {
        let once = normalize(title);
        assert_eq!(normalize(&once), once);
    }
}
