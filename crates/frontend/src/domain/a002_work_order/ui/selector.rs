use crate::shared::components::ui::Select;
use contracts::domain::a002_work_order::{WorkOrderCatalog, WorkOrderField, WorkOrderSelection};
use leptos::prelude::*;

/// Cascading dropdowns WO → style → buyer → item → color → size.
///
/// Picking a value clears the fields below it, then any field left with a
/// single possible value is filled in automatically.
#[component]
pub fn WorkOrderSelector(
    #[prop(into)] catalog: Signal<WorkOrderCatalog>,
    selection: RwSignal<WorkOrderSelection>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="work-order-selector">
            {WorkOrderField::ALL.into_iter().map(|field| {
                let options = Signal::derive(move || {
                    let sel = selection.get();
                    catalog.with(|c| c.options(field, &sel))
                        .into_iter()
                        .map(|v| (v.clone(), v))
                        .collect::<Vec<_>>()
                });
                let value = Signal::derive(move || {
                    selection.with(|s| s.get(field).unwrap_or_default().to_string())
                });
                // A dropdown is usable once everything above it is chosen
                let locked = Signal::derive(move || {
                    disabled.get()
                        || selection.with(|s| field.parents().iter().any(|p| s.get(*p).is_none()))
                });
                view! {
                    <Select
                        label=field.label()
                        value=value
                        options=options
                        disabled=locked
                        required=true
                        on_change=Callback::new(move |v: String| {
                            selection.update(|s| {
                                s.set(field, &v);
                                catalog.with_untracked(|c| c.autofill(s));
                            });
                        })
                    />
                }
            }).collect_view()}
        </div>
    }
}
