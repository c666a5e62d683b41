/// Lead intake: manual URL entry and active-tab capture

use log::debug;

use crate::domain::format_input;
use crate::error::{LeadError, Result};
use crate::lead::{Category, Lead};
use crate::storage::{LeadStore, SnapshotStorage};

/// Build a lead from text typed into the URL field
pub fn lead_from_input(raw: &str, category: Category) -> Result<Lead> {
    let url = format_input(raw)?;
    Ok(Lead::new(url, category))
}

/// Build a lead from the URL reported for the active tab.
///
/// The URL is used verbatim; only a missing or empty URL is rejected.
pub fn lead_from_tab(url: Option<String>, category: Category) -> Result<Lead> {
    match url {
        Some(url) if !url.trim().is_empty() => Ok(Lead::new(url, category)),
        _ => Err(LeadError::TabUrlUnavailable),
    }
}

/// Save manually entered text as a lead
pub fn save_input<S: SnapshotStorage>(
    store: &mut LeadStore<S>,
    raw: &str,
    category: Category,
) -> Result<Lead> {
    let lead = lead_from_input(raw, category)?;
    store.add(lead.clone())?;
    debug!("Saved {} from input", lead.url);
    Ok(lead)
}

/// Save the active tab's URL as a lead
pub fn save_tab<S: SnapshotStorage>(
    store: &mut LeadStore<S>,
    url: Option<String>,
    category: Category,
) -> Result<Lead> {
    let lead = lead_from_tab(url, category)?;
    store.add(lead.clone())?;
    debug!("Saved {} from active tab", lead.url);
    Ok(lead)
}

/// Whether the URL field should be emptied after a save attempt.
///
/// Successful saves and duplicates clear the field; empty or invalid input is
/// kept so it can be corrected.
pub fn clears_input(outcome: &Result<Lead>) -> bool {
    matches!(outcome, Ok(_) | Err(LeadError::Duplicate(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn empty_store() -> LeadStore<MemoryStorage> {
        LeadStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_save_input_prefixes_scheme() {
        let mut store = empty_store();

        let lead = save_input(&mut store, "example.com", Category::Work).unwrap();

        assert_eq!(lead.url, "https://example.com");
        assert_eq!(store.leads(), &[Lead::new("https://example.com", Category::Work)]);
    }

    #[test]
    fn test_save_input_twice() {
        let mut store = empty_store();

        save_input(&mut store, "https://example.com", Category::Uncategorized).unwrap();
        let second = save_input(&mut store, "https://example.com", Category::Uncategorized);

        assert_eq!(second, Err(LeadError::Duplicate("https://example.com".to_string())));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_input_duplicate_after_prefixing() {
        let mut store = empty_store();

        save_input(&mut store, "https://example.com", Category::Uncategorized).unwrap();
        let second = save_input(&mut store, "  example.com ", Category::Reading);

        assert!(matches!(second, Err(LeadError::Duplicate(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_input_rejects_empty_and_invalid() {
        let mut store = empty_store();

        assert_eq!(save_input(&mut store, "   ", Category::Uncategorized), Err(LeadError::EmptyInput));
        assert!(matches!(
            save_input(&mut store, "not a url", Category::Uncategorized),
            Err(LeadError::InvalidUrl(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_tab_uses_url_verbatim() {
        let mut store = empty_store();

        let lead = save_tab(
            &mut store,
            Some("chrome://extensions/".to_string()),
            Category::Research,
        )
        .unwrap();

        assert_eq!(lead.url, "chrome://extensions/");
        assert_eq!(store.leads()[0].category, Category::Research);
    }

    #[test]
    fn test_save_tab_without_url() {
        let mut store = empty_store();

        assert_eq!(save_tab(&mut store, None, Category::Uncategorized), Err(LeadError::TabUrlUnavailable));
        assert_eq!(
            save_tab(&mut store, Some(String::new()), Category::Uncategorized),
            Err(LeadError::TabUrlUnavailable)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_tab_duplicate() {
        let mut store = empty_store();
        save_input(&mut store, "https://github.com/rust-lang", Category::Uncategorized).unwrap();

        let result = save_tab(&mut store, Some("https://github.com/rust-lang".to_string()), Category::Work);

        assert!(matches!(result, Err(LeadError::Duplicate(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clears_input() {
        assert!(clears_input(&Ok(Lead::new("https://a.com", Category::Uncategorized))));
        assert!(clears_input(&Err(LeadError::Duplicate("https://a.com".to_string()))));
        assert!(!clears_input(&Err(LeadError::EmptyInput)));
        assert!(!clears_input(&Err(LeadError::InvalidUrl("https://x y".to_string()))));
    }
}
