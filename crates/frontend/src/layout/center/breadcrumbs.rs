use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::group_label_for_key;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Crumbs for a tab key: menu group, page title
pub(crate) fn crumbs_for_key(key: &str) -> Vec<&'static str> {
    let mut crumbs = Vec::with_capacity(2);
    if let Some(group) = group_label_for_key(key) {
        crumbs.push(group);
    }
    crumbs.push(tab_label_for_key(key));
    crumbs
}

/// "Group › Page › Line" trail for the active tab
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let trail = move || {
        let Some(key) = ctx.active.get() else {
            return Vec::new();
        };
        let mut items: Vec<String> = crumbs_for_key(&key)
            .into_iter()
            .map(str::to_string)
            .collect();
        if let Some(line) = ctx.selected_line.get() {
            items.push(format!("Line {line}"));
        }
        items
    };

    view! {
        <nav class="breadcrumbs" aria-label="breadcrumb">
            {move || {
                let items = trail();
                let last = items.len().saturating_sub(1);
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <span class="breadcrumbs__item" class:breadcrumbs__item--current=i == last>
                                {item}
                            </span>
                            {(i < last).then(|| view! {
                                <span class="breadcrumbs__separator">{icon("chevron-right")}</span>
                            })}
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crumbs_for_known_key() {
        assert_eq!(
            crumbs_for_key("d400_line_tracking"),
            vec!["Dashboards", "Line tracking"]
        );
    }

    #[test]
    fn test_crumbs_for_unknown_key() {
        assert_eq!(crumbs_for_key("zzz"), vec!["Unknown page"]);
    }
}
