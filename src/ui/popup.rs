/// Popup UI for Leads Tracker extension

use log::{info, warn};
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{CONFIRM_DELETE_ALL, SEARCH_QUIET_PERIOD_MS};
use crate::debounce::Debouncer;
use crate::error::LeadError;
use crate::intake;
use crate::lead::Category;
use crate::search::filter_leads;
use crate::storage::LeadStore;
use crate::ui::browser::{active_tab_url, confirm, LocalStorage, WindowTimers};
use crate::ui::components::{CategorySelect, LeadList};
use crate::view::LeadListView;

#[derive(Clone, PartialEq)]
enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Message shown above the list after an action
#[derive(Clone, PartialEq)]
struct Notice {
    kind: NoticeKind,
    text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    fn from_error(err: &LeadError) -> Self {
        let kind = match err {
            LeadError::EmptyInput
            | LeadError::InvalidUrl(_)
            | LeadError::Duplicate(_)
            | LeadError::NothingToDelete
            | LeadError::CorruptSnapshot(_) => NoticeKind::Warning,
            _ => NoticeKind::Error,
        };
        Notice {
            kind,
            text: err.to_string(),
        }
    }

    fn alert_type(&self) -> AlertType {
        match self.kind {
            NoticeKind::Success => AlertType::Success,
            NoticeKind::Warning => AlertType::Warning,
            NoticeKind::Error => AlertType::Danger,
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_mut_ref(|| LeadStore::new(LocalStorage::open()));
    let redraw = use_force_update();
    let notice = use_state(|| None::<Notice>);
    let input_value = use_state(String::new);
    let category = use_state(Category::default);
    let search_text = use_state(String::new);
    let applied_query = use_state(String::new);
    let capturing = use_state(|| false);
    let debouncer = use_mut_ref(|| Debouncer::new(WindowTimers, SEARCH_QUIET_PERIOD_MS));

    // Load saved leads on mount
    {
        let store = store.clone();
        let notice = notice.clone();
        let redraw = redraw.clone();

        use_effect_with((), move |_| {
            match store.borrow_mut().load() {
                Ok(count) => info!("Loaded {} leads", count),
                Err(e) => {
                    warn!("Failed to load leads: {}", e);
                    notice.set(Some(Notice::from_error(&e)));
                }
            }
            redraw.force_update();
            || ()
        });
    }

    // Save typed URL (button or Enter)
    let save_input = {
        let store = store.clone();
        let notice = notice.clone();
        let input_value = input_value.clone();
        let category = category.clone();
        let redraw = redraw.clone();

        Callback::from(move |_: ()| {
            let outcome = intake::save_input(&mut *store.borrow_mut(), input_value.as_str(), *category);

            if intake::clears_input(&outcome) {
                input_value.set(String::new());
            }
            match outcome {
                Ok(lead) => notice.set(Some(Notice::success(format!("Saved {}", lead.url)))),
                Err(e) => notice.set(Some(Notice::from_error(&e))),
            }
            redraw.force_update();
        })
    };

    let on_save_click = save_input.reform(|_: MouseEvent| ());

    let on_input_keypress = {
        let save_input = save_input.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                save_input.emit(());
            }
        })
    };

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input_value.set(input.value());
            }
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |selected: Category| category.set(selected))
    };

    // Save active tab handler
    let on_capture = {
        let store = store.clone();
        let notice = notice.clone();
        let category = category.clone();
        let capturing = capturing.clone();
        let redraw = redraw.clone();

        Callback::from(move |_: MouseEvent| {
            if *capturing {
                return;
            }
            capturing.set(true);

            let store = store.clone();
            let notice = notice.clone();
            let capturing = capturing.clone();
            let redraw = redraw.clone();
            let category = *category;

            spawn_local(async move {
                let outcome = match active_tab_url().await {
                    Ok(url) => intake::save_tab(&mut *store.borrow_mut(), url, category),
                    Err(e) => Err(e),
                };

                match outcome {
                    Ok(lead) => notice.set(Some(Notice::success(format!("Saved {}", lead.url)))),
                    Err(e) => notice.set(Some(Notice::from_error(&e))),
                }
                capturing.set(false);
                redraw.force_update();
            });
        })
    };

    // Delete a single lead by url
    let on_delete = {
        let store = store.clone();
        let notice = notice.clone();
        let redraw = redraw.clone();

        Callback::from(move |url: String| {
            let result = store.borrow_mut().remove_url(&url);
            match result {
                Ok(lead) => info!("Deleted {}", lead.url),
                Err(e) => {
                    warn!("Delete failed: {}", e);
                    notice.set(Some(Notice::from_error(&e)));
                }
            }
            redraw.force_update();
        })
    };

    // Delete everything (double click, then confirm)
    let on_delete_all = {
        let store = store.clone();
        let notice = notice.clone();
        let redraw = redraw.clone();

        Callback::from(move |_: MouseEvent| {
            if store.borrow().is_empty() {
                notice.set(Some(Notice::from_error(&LeadError::NothingToDelete)));
                return;
            }
            if !confirm(CONFIRM_DELETE_ALL) {
                return;
            }

            let result = store.borrow_mut().clear();
            match result {
                Ok(()) => notice.set(Some(Notice::success("All leads deleted"))),
                Err(e) => notice.set(Some(Notice::from_error(&e))),
            }
            redraw.force_update();
        })
    };

    // Search handler, applied after the quiet period
    let on_search_input = {
        let search_text = search_text.clone();
        let applied_query = applied_query.clone();
        let debouncer = debouncer.clone();

        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let query = input.value();
                search_text.set(query.clone());

                let applied_query = applied_query.clone();
                debouncer.borrow().schedule(move || applied_query.set(query));
            }
        })
    };

    let (view, total) = {
        let store = store.borrow();
        let searching = !store.is_empty() && !applied_query.trim().is_empty();
        let view = LeadListView::render(filter_leads(store.leads(), applied_query.as_str()), searching);
        (view, store.len())
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Leads Tracker"}</h1>

            <div class="flex-column-gap">
                <input
                    id="input-el"
                    type="text"
                    placeholder="Enter a URL..."
                    value={(*input_value).clone()}
                    oninput={on_input}
                    onkeypress={on_input_keypress}
                    class="url-input"
                />
                <CategorySelect value={*category} onchange={on_category_change} />
                <div class="button-row">
                    <Button onclick={on_save_click} variant={ButtonVariant::Primary}>
                        {"SAVE INPUT"}
                    </Button>
                    <Button onclick={on_capture} disabled={*capturing} variant={ButtonVariant::Secondary}>
                        {if *capturing { "SAVING..." } else { "SAVE TAB" }}
                    </Button>
                    <button
                        id="delete-btn"
                        class="pf-v5-c-button pf-m-danger"
                        title="Double-click to delete all leads"
                        ondblclick={on_delete_all}
                    >
                        {"DELETE ALL"}
                    </button>
                </div>
            </div>

            // Status display
            if let Some(notice) = (*notice).clone() {
                <div class="message-top-margin">
                    <Alert r#type={notice.alert_type()} title={notice.text.clone()} inline={true}>
                    </Alert>
                </div>
            }

            <div class="search-container">
                <input
                    type="text"
                    placeholder="Search leads..."
                    value={(*search_text).clone()}
                    oninput={on_search_input}
                    class="search-input"
                />
            </div>

            <LeadList {view} {on_delete} />

            <p class="footer-popup">
                {format!("{} saved • Leads Tracker v{}", total, env!("CARGO_PKG_VERSION"))}
            </p>
        </div>
    }
}
