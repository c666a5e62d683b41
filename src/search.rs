/// Search filter over saved leads

use crate::domain::hostname;
use crate::lead::Lead;

/// Leads whose URL or hostname contains `query`, ignoring case.
///
/// An empty (or all-whitespace) query keeps every lead. Order is preserved.
pub fn filter_leads<'a>(leads: &'a [Lead], query: &str) -> Vec<&'a Lead> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return leads.iter().collect();
    }

    leads
        .iter()
        .filter(|lead| matches_query(lead, &query))
        .collect()
}

/// `query` must already be lowercased
fn matches_query(lead: &Lead, query: &str) -> bool {
    lead.url.to_lowercase().contains(query)
        || hostname(&lead.url).is_some_and(|host| host.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::Category;

    fn leads(urls: &[&str]) -> Vec<Lead> {
        urls.iter()
            .map(|url| Lead::new(*url, Category::Uncategorized))
            .collect()
    }

    fn urls<'a>(filtered: &[&'a Lead]) -> Vec<&'a str> {
        filtered.iter().map(|lead| lead.url.as_str()).collect()
    }

    #[test]
    fn test_filter_by_substring() {
        let saved = leads(&["https://a.com", "https://b.com"]);

        assert_eq!(urls(&filter_leads(&saved, "a")), vec!["https://a.com"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let saved = leads(&["https://GitHub.com/Rust-Lang", "https://docs.rs"]);

        assert_eq!(urls(&filter_leads(&saved, "rust-LANG")), vec!["https://GitHub.com/Rust-Lang"]);
        assert_eq!(urls(&filter_leads(&saved, "DOCS")), vec!["https://docs.rs"]);
    }

    #[test]
    fn test_filter_matches_parsed_hostname() {
        // Parsed hosts are punycode, the raw url is not
        let saved = leads(&["https://bücher.de/buch", "https://example.com"]);

        assert_eq!(urls(&filter_leads(&saved, "xn--bcher")), vec!["https://bücher.de/buch"]);
    }

    #[test]
    fn test_filter_unparseable_url_uses_raw_text() {
        let saved = leads(&["not a url", "https://example.com"]);

        assert_eq!(urls(&filter_leads(&saved, "NOT A")), vec!["not a url"]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let saved = leads(&["https://a.com", "https://b.com"]);

        assert_eq!(filter_leads(&saved, "").len(), 2);
        assert_eq!(filter_leads(&saved, "   ").len(), 2);
    }

    #[test]
    fn test_no_matches() {
        let saved = leads(&["https://a.com", "https://b.com"]);

        assert!(filter_leads(&saved, "zzz").is_empty());
    }
}
