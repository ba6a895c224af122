// src/specs/stats_page.rs
//
// Layout of a `/years/<year>/<stat>.htm` page:
//
//   div#content
//     div#all_<id>                  (may wrap its contents in <!-- ... -->;
//                                    such comments are parsed as fragments)
//       div.table_container
//         table#<id>
//           thead  [tr.over_header]  tr  th th th …
//           tbody  tr  th(rank) td td td …
//
// Column names come from the real header row minus the leading rank cell;
// body cells are the `td`s of each row, so the rank `th` never lands in a row.

use std::time::Instant;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{
    CONTENT_ID, LEADING_INDEX_COLUMNS, OVER_HEADER_CLASS, TABLE_CONTAINER_CLASS,
};
use crate::core::html::{cell_text, hidden_table, hidden_tables, parse_page, selector};
use crate::core::sanitize::strip_quotes;
use crate::data::{RecordSet, TableId};
use crate::error::{Result, StatsError};

/// Table ids in container order. A page without `#content` or without any
/// container is not an error; it simply has no tables.
pub fn parse_table_ids(html_doc: &str) -> Result<Vec<TableId>> {
    let t = Instant::now();
    let page = parse_page(html_doc);
    let ids = table_ids_in(&page)?;
    logd!("Stats page: {} table id(s) in {:?}", ids.len(), t.elapsed());
    Ok(ids)
}

fn table_ids_in(page: &Html) -> Result<Vec<TableId>> {
    let content_sel = selector(&format!("#{CONTENT_ID}"))?;
    let container_sel = selector(&format!("div.{TABLE_CONTAINER_CLASS}"))?;
    let table_sel = selector("table")?;

    let Some(content) = page.select(&content_sel).next() else {
        logw!("Stats page: no #{CONTENT_ID} element, no tables to scrape");
        return Ok(Vec::new());
    };

    // Live containers and table-bearing comments, in document order.
    let mut found: Vec<Option<TableId>> = Vec::new();
    for node in content.descendants() {
        if let Some(el) = ElementRef::wrap(node) {
            if container_sel.matches(&el) {
                found.push(container_table_id(el, &table_sel));
            }
        } else if let Some(fragment) = hidden_table(node.value()) {
            found.extend(
                fragment
                    .select(&container_sel)
                    .map(|el| container_table_id(el, &table_sel)),
            );
        }
    }

    let containers = found.len();
    let ids: Vec<TableId> = found.into_iter().flatten().collect();
    if containers > ids.len() {
        logd!("Stats page: {} container(s) without a table id, skipped", containers - ids.len());
    }
    if containers == 0 {
        logw!("Stats page: no .{TABLE_CONTAINER_CLASS} elements under #{CONTENT_ID}");
    }
    Ok(ids)
}

/// Id of the first table in a container, quotes stripped.
fn container_table_id(container: ElementRef<'_>, table_sel: &Selector) -> Option<TableId> {
    container
        .select(table_sel)
        .next()
        .and_then(|table| table.value().attr("id"))
        .and_then(TableId::new)
}

/// Extract one table by id.
pub fn parse_table(html_doc: &str, id: &TableId) -> Result<RecordSet> {
    let t = Instant::now();
    let page = parse_page(html_doc);
    let hidden = hidden_tables(&page);
    let table_sel = selector("table")?;
    let sel = &table_sel;

    let table = std::iter::once(&page)
        .chain(hidden.iter())
        .flat_map(move |doc| doc.select(sel))
        .find(|el| el.value().id().map(strip_quotes).as_deref() == Some(id.as_str()))
        .ok_or_else(|| StatsError::Parse(format!("table \"{id}\" not found")))?;

    let columns = header_names(table, id)?;
    let rows = body_rows(table, id, columns.len())?;
    logd!(
        "Stats page: table {} -> {} columns x {} rows in {:?}",
        id, columns.len(), rows.len(), t.elapsed()
    );

    RecordSet::new(columns, rows)
}

/// Column names from the real header row, leading index cells dropped.
fn header_names(table: ElementRef<'_>, id: &TableId) -> Result<Vec<String>> {
    let thead_sel = selector("thead")?;
    let tr_sel = selector("tr")?;
    let th_sel = selector("th")?;

    let thead = table
        .select(&thead_sel)
        .next()
        .ok_or_else(|| StatsError::Parse(format!("table {id} has no <thead>")))?;

    let header_rows: Vec<ElementRef<'_>> = thead.select(&tr_sel).collect();
    let has_over_header = header_rows
        .iter()
        .any(|tr| tr.value().classes().any(|c| c == OVER_HEADER_CLASS));
    let pick = usize::from(has_over_header);

    let header_row = header_rows.get(pick).ok_or_else(|| {
        StatsError::Parse(if has_over_header {
            format!("table {id} has an over-header but no column-name row")
        } else {
            format!("table {id} has no header rows")
        })
    })?;

    Ok(header_row
        .select(&th_sel)
        .skip(LEADING_INDEX_COLUMNS)
        .map(cell_text)
        .collect())
}

/// `td` text of each body row, padded to `width`. Rows with no `td` at all
/// (the site repeats its header inside long tables) become all-empty rows so
/// the row count always matches the number of body `tr`s.
fn body_rows(table: ElementRef<'_>, id: &TableId, width: usize) -> Result<Vec<Vec<String>>> {
    let tbody_sel = selector("tbody")?;
    let tr_sel = selector("tr")?;
    let td_sel = selector("td")?;

    let tbody = table
        .select(&tbody_sel)
        .next()
        .ok_or_else(|| StatsError::Parse(format!("table {id} has no <tbody>")))?;

    let mut rows = Vec::new();
    for (ix, tr) in tbody.select(&tr_sel).enumerate() {
        let mut cells: Vec<String> = tr.select(&td_sel).map(cell_text).collect();
        if cells.len() > width {
            return Err(StatsError::Parse(format!(
                "table {id} row {ix} has {} cells but only {width} columns",
                cells.len()
            )));
        }
        cells.resize(width, s!());
        rows.push(cells);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div id="header"><div class="table_container"><table id="nav"></table></div></div>
          <div id="content">
            <div id="all_passing">
              <div class="table_container">
                <table id="passing">
                  <thead>
                    <tr><th>Rk</th><th>Player</th><th>Tm</th><th>Yds</th><th>TD</th></tr>
                  </thead>
                  <tbody>
                    <tr><th>1</th><td><a href="/p/A">Alpha</a></td><td>KAN</td><td>4740</td><td>38</td></tr>
                    <tr><th>2</th><td>Bravo</td><td>TAM</td><td>4633</td><td>40</td></tr>
                  </tbody>
                </table>
              </div>
            </div>
            <div id="all_advanced">
              <!--
              <div class="table_container">
                <table id="advanced_air_yards">
                  <thead>
                    <tr class="over_header"><th></th><th colspan="2">Passing</th><th colspan="2">Rushing</th></tr>
                    <tr><th>Rk</th><th>Player</th><th>Yds</th><th>Yds</th><th>TD</th></tr>
                  </thead>
                  <tbody>
                    <tr><th>1</th><td>Alpha</td><td>100</td><td>20</td><td>2</td></tr>
                    <tr class="thead"><th>Rk</th><th>Player</th><th>Yds</th><th>Yds</th><th>TD</th></tr>
                    <tr><th>2</th><td>Bravo</td><td>50</td></tr>
                  </tbody>
                </table>
              </div>
              -->
            </div>
            <div class="table_container"><table class="no_id"></table></div>
            <div class="table_container"><table id='"quoted"'></table></div>
          </div>
        </body></html>
    "#;

    fn id(s: &str) -> TableId {
        TableId::new(s).unwrap()
    }

    #[test]
    fn ids_in_container_order_including_commented() {
        let ids = parse_table_ids(PAGE).unwrap();
        assert_eq!(ids, vec![id("passing"), id("advanced_air_yards"), id("quoted")]);
    }

    #[test]
    fn markup_in_plain_comments_cannot_hide_later_tables() {
        let doc = r#"<div id="content">
            <div class="table_container"><table id="a"></table></div>
            <!-- old layout: </div> -->
            <!-- <script> -->
            <div class="table_container"><table id="b"></table></div>
          </div>"#;
        assert_eq!(parse_table_ids(doc).unwrap(), vec![id("a"), id("b")]);
    }

    #[test]
    fn commented_table_keeps_its_place_among_live_ones() {
        let doc = r#"<div id="content">
            <div class="table_container"><table id="first"></table></div>
            <div id="all_mid"><!-- <div class="table_container"><table id="mid"></table></div> --></div>
            <div class="table_container"><table id="last"></table></div>
          </div>"#;
        assert_eq!(parse_table_ids(doc).unwrap(), vec![id("first"), id("mid"), id("last")]);
    }

    #[test]
    fn no_content_means_no_tables() {
        let doc = r#"<div class="table_container"><table id="x"></table></div>"#;
        assert!(parse_table_ids(doc).unwrap().is_empty());
    }

    #[test]
    fn simple_header_drops_rank_column() {
        let rs = parse_table(PAGE, &id("passing")).unwrap();
        assert_eq!(rs.columns(), ["Player", "Tm", "Yds", "TD"]);
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.get(0, "Player"), Some("Alpha"));
        assert_eq!(rs.get(1, "TD"), Some("40"));
    }

    #[test]
    fn over_header_uses_second_row_and_pads_rows() {
        let rs = parse_table(PAGE, &id("advanced_air_yards")).unwrap();
        assert_eq!(rs.columns(), ["Player", "Yds", "Yds.1", "TD"]);
        // three body <tr>s, including the repeated header row
        assert_eq!(rs.len(), 3);
        assert_eq!(rs.row(1).unwrap(), ["", "", "", ""]);
        assert_eq!(rs.row(2).unwrap(), ["Bravo", "50", "", ""]);
        assert_eq!(rs.get(0, "Yds.1"), Some("20"));
    }

    #[test]
    fn quoted_id_resolves() {
        let doc = r#"<table id='"q"'><thead><tr><th>Rk</th><th>A</th></tr></thead>
                     <tbody><tr><th>1</th><td>x</td></tr></tbody></table>"#;
        let rs = parse_table(doc, &id("q")).unwrap();
        assert_eq!(rs.get(0, "A"), Some("x"));
    }

    #[test]
    fn unknown_table_is_parse_error() {
        let err = parse_table(PAGE, &id("rushing")).unwrap_err();
        assert!(matches!(err, StatsError::Parse(_)));
    }

    #[test]
    fn missing_thead_is_parse_error() {
        let doc = r#"<table id="t"><tbody><tr><td>1</td></tr></tbody></table>"#;
        assert!(matches!(parse_table(doc, &id("t")), Err(StatsError::Parse(_))));
    }

    #[test]
    fn over_header_alone_is_parse_error() {
        let doc = r#"<table id="t"><thead><tr class="over_header"><th>G</th></tr></thead>
                     <tbody><tr><td>1</td></tr></tbody></table>"#;
        assert!(matches!(parse_table(doc, &id("t")), Err(StatsError::Parse(_))));
    }

    #[test]
    fn missing_tbody_is_parse_error() {
        let doc = r#"<table id="t"><thead><tr><th>Rk</th><th>A</th></tr></thead></table>"#;
        assert!(matches!(parse_table(doc, &id("t")), Err(StatsError::Parse(_))));
    }

    #[test]
    fn too_many_cells_is_parse_error() {
        let doc = r#"<table id="t"><thead><tr><th>Rk</th><th>A</th></tr></thead>
                     <tbody><tr><th>1</th><td>x</td><td>y</td></tr></tbody></table>"#;
        assert!(matches!(parse_table(doc, &id("t")), Err(StatsError::Parse(_))));
    }
}
