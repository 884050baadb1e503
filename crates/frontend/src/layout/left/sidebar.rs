//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

pub(crate) fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![
                ("d400_line_tracking", tab_label_for_key("d400_line_tracking"), "activity"),
                ("d401_factory_overview", tab_label_for_key("d401_factory_overview"), "factory"),
            ],
        },
        MenuGroup {
            id: "production",
            label: "Production",
            icon: "package",
            items: vec![
                ("a001_production_line", tab_label_for_key("a001_production_line"), "settings"),
                ("a002_work_order", tab_label_for_key("a002_work_order"), "list"),
            ],
        },
        MenuGroup {
            id: "rfid",
            label: "RFID",
            icon: "tag",
            items: vec![
                ("u501_rfid_registration", tab_label_for_key("u501_rfid_registration"), "tag"),
                ("u502_rfid_checking", tab_label_for_key("u502_rfid_checking"), "search"),
                ("u503_rfid_reject", tab_label_for_key("u503_rfid_reject"), "trash"),
            ],
        },
    ]
}

/// Menu group a tab key belongs to
pub(crate) fn group_label_for_key(key: &str) -> Option<&'static str> {
    get_menu_groups()
        .into_iter()
        .find(|g| g.items.iter().any(|(id, _, _)| *id == key))
        .map(|g| g.label)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // All groups start expanded; the menu is short
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (id, label, _) in group.items {
                assert_ne!(label, id, "missing label for {id}");
            }
        }
    }

    #[test]
    fn test_group_lookup() {
        assert_eq!(group_label_for_key("u502_rfid_checking"), Some("RFID"));
        assert_eq!(group_label_for_key("nope"), None);
    }
}
