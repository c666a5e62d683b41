/// View model for the lead list: what the popup draws for a sequence of leads

use crate::config::{EMPTY_LIST_MESSAGE, NO_MATCH_MESSAGE};
use crate::domain::{display_label, link_href};
use crate::lead::{Category, Lead};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRow {
    /// Position within the rendered sequence
    pub position: usize,
    pub label: String,
    /// Full URL, shown as the tooltip
    pub title: String,
    /// Link target; `None` when the URL's scheme is not safe to open
    pub href: Option<String>,
    pub category: Category,
    /// Identity passed back when this row's delete control is used
    pub delete_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadListView {
    Placeholder(&'static str),
    Rows(Vec<LeadRow>),
}

impl LeadListView {
    /// Project a (possibly filtered) sequence of leads into rows.
    ///
    /// `searching` selects the placeholder used when the sequence is empty.
    pub fn render<'a>(leads: impl IntoIterator<Item = &'a Lead>, searching: bool) -> LeadListView {
        let rows: Vec<LeadRow> = leads
            .into_iter()
            .enumerate()
            .map(|(position, lead)| LeadRow {
                position,
                label: display_label(&lead.url),
                title: lead.url.clone(),
                href: link_href(&lead.url),
                category: lead.category,
                delete_key: lead.url.clone(),
            })
            .collect();

        if rows.is_empty() {
            LeadListView::Placeholder(if searching { NO_MATCH_MESSAGE } else { EMPTY_LIST_MESSAGE })
        } else {
            LeadListView::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[LeadRow] {
        match self {
            LeadListView::Placeholder(_) => &[],
            LeadListView::Rows(rows) => rows,
        }
    }

    pub fn deletable_count(&self) -> usize {
        self.rows().len()
    }
}
