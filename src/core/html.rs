// src/core/html.rs
//
// Page parsing and small `scraper` helpers shared by the page specs.
//
// The site ships most secondary tables inside HTML comments. Those comments
// are parsed on their own as fragments; every other comment stays an inert
// comment node, so stray markup in it cannot reshape the live page.

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{Result, StatsError};

const TABLE_MARKER: &str = "<table";

pub fn parse_page(html: &str) -> Html {
    Html::parse_document(html)
}

/// Parse a comment's text as a fragment if it carries a table; `None` for
/// any other node or comment.
pub fn hidden_table(node: &Node) -> Option<Html> {
    let Node::Comment(comment) = node else { return None };
    let text: &str = comment;
    text.contains(TABLE_MARKER).then(|| Html::parse_fragment(text))
}

/// Fragments for every table-bearing comment in the document, in document order.
pub fn hidden_tables(page: &Html) -> Vec<Html> {
    page.tree
        .root()
        .descendants()
        .filter_map(|node| hidden_table(node.value()))
        .collect()
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| StatsError::Parse(format!("bad selector {css:?}: {e:?}")))
}

/// Concatenated descendant text, untrimmed.
pub fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}
