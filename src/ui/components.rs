/// Reusable UI components

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::lead::Category;
use crate::view::{LeadListView, LeadRow};

#[derive(Properties, PartialEq)]
pub struct CategoryBadgeProps {
    pub category: Category,
}

#[function_component(CategoryBadge)]
pub fn category_badge(props: &CategoryBadgeProps) -> Html {
    let (bg_color, color) = match props.category {
        Category::Uncategorized => ("#eeeeee", "#555"),
        Category::Work => ("#e3f2fd", "#1565c0"),
        Category::Personal => ("#e8f5e9", "#2e7d32"),
        Category::Research => ("#fff3e0", "#e65100"),
        Category::Reading => ("#f3e5f5", "#6a1b9a"),
    };

    html! {
        <span
            class={classes!("category-badge", format!("category-{}", props.category.as_str()))}
            style={format!("background-color: {}; color: {};", bg_color, color)}
        >
            {props.category.label()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategorySelectProps {
    pub value: Category,
    pub onchange: Callback<Category>,
}

#[function_component(CategorySelect)]
pub fn category_select(props: &CategorySelectProps) -> Html {
    let onchange = props.onchange.reform(|e: Event| {
        e.target_dyn_into::<HtmlSelectElement>()
            .map(|select| Category::parse(&select.value()))
            .unwrap_or_default()
    });

    html! {
        <select id="category-el" class="category-select" {onchange}>
            {for Category::ALL.iter().map(|category| html! {
                <option value={category.as_str()} selected={*category == props.value}>
                    {category.label()}
                </option>
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
struct LeadItemProps {
    row: LeadRow,
    on_delete: Callback<String>,
}

#[function_component(LeadItem)]
fn lead_item(props: &LeadItemProps) -> Html {
    let row = &props.row;

    let on_delete = {
        let key = row.delete_key.clone();
        props.on_delete.reform(move |e: MouseEvent| {
            e.stop_propagation();
            key.clone()
        })
    };

    html! {
        <li class="lead-item">
            if let Some(href) = row.href.clone() {
                <a class="lead-link" target="_blank" rel="noopener noreferrer" {href} title={row.title.clone()}>
                    {&row.label}
                </a>
            } else {
                <span class="lead-link" title={row.title.clone()}>{&row.label}</span>
            }
            <CategoryBadge category={row.category} />
            <span class="delete-lead" title="Delete" onclick={on_delete}>{"×"}</span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadListProps {
    pub view: LeadListView,
    /// Receives the url of the lead to delete
    pub on_delete: Callback<String>,
}

#[function_component(LeadList)]
pub fn lead_list(props: &LeadListProps) -> Html {
    match &props.view {
        LeadListView::Placeholder(message) => html! {
            <p class="no-leads">{*message}</p>
        },
        LeadListView::Rows(rows) => html! {
            <ul id="ul-el" class="lead-list">
                {for rows.iter().map(|row| html! {
                    <LeadItem
                        key={row.delete_key.clone()}
                        row={row.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                })}
            </ul>
        },
    }
}
