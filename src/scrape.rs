// src/scrape.rs
//
// Page-level scraping: fetch a stats page through a PageSource and hand the
// HTML to the page spec. Nothing is cached between calls; each call fetches
// the page again, so calls are independent and idempotent.

use crate::core::net::PageSource;
use crate::data::{RecordSet, TableId};
use crate::error::Result;
use crate::specs::stats_page;

/// `http://<host>/years/<year>/<stat>.htm`
pub fn stats_url(host: &str, year: u32, stat: &str) -> String {
    format!("http://{host}/years/{year}/{stat}.htm")
}

pub struct Scraper<S: PageSource> {
    url: String,
    source: S,
}

impl<S: PageSource> Scraper<S> {
    pub fn new(url: impl Into<String>, source: S) -> Self {
        Self { url: url.into(), source }
    }

    pub fn url(&self) -> &str { &self.url }

    /// Ids of every table on the page, including commented-out ones, in the
    /// order their containers appear. Empty if the page has no tables.
    pub fn discover_table_ids(&self) -> Result<Vec<TableId>> {
        let html = self.source.fetch(&self.url)?;
        let ids = stats_page::parse_table_ids(&html)?;
        logf!("Found {} table(s) on {}", ids.len(), self.url);
        Ok(ids)
    }

    /// Fetch the page again and extract one table.
    pub fn scrape_table(&self, id: &TableId) -> Result<RecordSet> {
        let html = self.source.fetch(&self.url)?;
        stats_page::parse_table(&html, id)
    }

    /// Discover, then scrape each table in discovery order.
    pub fn scrape_all(&self) -> Result<Vec<(TableId, RecordSet)>> {
        let ids = self.discover_table_ids()?;
        let mut out = Vec::with_capacity(ids.len());
        for id in ids {
            let rs = self.scrape_table(&id)?;
            out.push((id, rs));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::StatsError;

    struct Fixture {
        html: &'static str,
        fetches: Cell<usize>,
    }

    impl PageSource for Fixture {
        fn fetch(&self, _url: &str) -> Result<String> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(s!(self.html))
        }
    }

    struct Offline;

    impl PageSource for Offline {
        fn fetch(&self, url: &str) -> Result<String> {
            Err(StatsError::Parse(format!("offline: {url}")))
        }
    }

    const PAGE: &str = r#"<div id="content">
        <div class="table_container"><table id="rushing">
          <thead><tr><th>Rk</th><th>Player</th><th>Yds</th></tr></thead>
          <tbody><tr><th>1</th><td>A</td><td>1500</td></tr></tbody>
        </table></div></div>"#;

    #[test]
    fn url_layout() {
        assert_eq!(
            stats_url("www.pro-football-reference.com", 2020, "passing"),
            "http://www.pro-football-reference.com/years/2020/passing.htm"
        );
    }

    #[test]
    fn every_call_refetches() {
        let src = Fixture { html: PAGE, fetches: Cell::new(0) };
        let scraper = Scraper::new("http://x/years/2020/rushing.htm", &src);

        let all = scraper.scrape_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].0.as_str(), "rushing");
        assert_eq!(all[0].1.get(0, "Yds"), Some("1500"));
        // one discovery fetch + one per table
        assert_eq!(src.fetches.get(), 2);

        let again = scraper.scrape_table(&all[0].0).unwrap();
        assert_eq!(again, all[0].1);
    }

    #[test]
    fn fetch_errors_propagate() {
        let scraper = Scraper::new("http://x/", Offline);
        assert!(scraper.discover_table_ids().is_err());
    }
}
