// src/specs/months.rs

use crate::config::consts::{HREF_ATTR, LEDGER_HREF_NEEDLE, ROOT_URL};

/// Discover the per-month ledger URLs from a ledger page body.
///
/// The month selector renders one `href="/account/ledger/YYYY-MM"` per month
/// (the current month's ends in `" SELECTED>`); cutting each attribute at the
/// first quote covers both forms. Order is document order, which is the
/// site's month order.
pub fn ledger_urls(body: &str) -> Vec<String> {
    let mut urls = Vec::new();
    for chunk in body.split(HREF_ATTR).skip(1) {
        let path = chunk.split('"').next().unwrap_or(chunk);
        if path.contains(LEDGER_HREF_NEEDLE) {
            urls.push(format!("{ROOT_URL}{path}"));
        }
    }
    urls
}

/// Last path segment of a ledger URL, i.e. the `YYYY-MM` month.
pub fn month_of(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_ledger_links_and_skips_the_rest() {
        let body = r#"
            <a href="/profiles/show/129317">me</a>
            <option href="/account/ledger/2019-12">Dec</option>
            <option href="/account/ledger/2020-01" SELECTED>Jan</option>
            <a href="/trades">trades</a>
        "#;
        let urls = ledger_urls(body);
        assert_eq!(
            urls,
            vec![
                "https://pucatrade.com/account/ledger/2019-12",
                "https://pucatrade.com/account/ledger/2020-01",
            ]
        );
    }

    #[test]
    fn keeps_document_order_and_handles_empty() {
        assert!(ledger_urls("no links here").is_empty());

        let body = r#"href="/account/ledger/2013-05" href="/account/ledger/2012-11""#;
        let urls = ledger_urls(body);
        let months: Vec<&str> = urls.iter().map(|u| month_of(u)).collect();
        assert_eq!(months, vec!["2013-05", "2012-11"]);
    }

    #[test]
    fn month_of_takes_last_segment() {
        assert_eq!(month_of("https://pucatrade.com/account/ledger/2020-01"), "2020-01");
        assert_eq!(month_of("2020-01"), "2020-01");
    }
}
