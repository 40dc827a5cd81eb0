// src/core/html.rs
//
// Small traversal helpers over a parsed `scraper::Html` tree.
// Walks element children directly instead of CSS selectors; the parser already
// normalizes table structure (implicit <tbody>, lowercase tag names).

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;

/// All `<table>` elements in document order.
pub fn tables(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "table")
}

/// Element children of `el` with the given tag name.
pub fn child_elements<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name() == tag)
}

/// Rows of the table body(ies). Rows under <thead>/<tfoot> are left out.
pub fn body_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    child_elements(table, "tbody")
        .flat_map(|tb| child_elements(tb, "tr"))
        .collect()
}

/// `<td>`/`<th>` cells of a row, in order.
pub fn row_cells(tr: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
        .collect()
}

/// True when every cell is a header cell (a header row placed inside <tbody>).
pub fn is_header_row(cells: &[ElementRef<'_>]) -> bool {
    !cells.is_empty() && cells.iter().all(|c| c.value().name() == "th")
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c.eq_ignore_ascii_case(class))
}

/// Visible text of an element: text nodes joined with a space, whitespace collapsed.
/// Entities are already decoded by the parser.
pub fn text_of(el: ElementRef<'_>) -> String {
    let joined: Vec<&str> = el.text().collect();
    normalize_ws(&joined.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
        <table class="menu"><tr><td>nav</td></tr></table>
        <table class="Tablesaw tablesaw-stack">
          <thead><tr><th>Week</th><th>Mon</th></tr></thead>
          <tr><th>Week</th><th>Mon</th></tr>
          <tr><td> 1 </td><td>3&nbsp;mi <br>run</td></tr>
        </table>
        </body></html>"#;

    #[test]
    fn finds_tables_and_body_rows() {
        let doc = Html::parse_document(DOC);
        let all: Vec<_> = tables(&doc).collect();
        assert_eq!(all.len(), 2);
        assert!(has_class(all[1], "tablesaw"));
        assert!(!has_class(all[0], "tablesaw"));

        // implicit <tbody> holds both bare rows; the <thead> row is excluded
        let rows = body_rows(all[1]);
        assert_eq!(rows.len(), 2);
        assert!(is_header_row(&row_cells(rows[0])));
        assert!(!is_header_row(&row_cells(rows[1])));
    }

    #[test]
    fn cell_text_is_decoded_and_collapsed() {
        let doc = Html::parse_document(DOC);
        let table = tables(&doc).nth(1).unwrap();
        let rows = body_rows(table);
        let cells = row_cells(rows[1]);
        assert_eq!(text_of(cells[0]), "1");
        assert_eq!(text_of(cells[1]), "3 mi run");
    }
}
