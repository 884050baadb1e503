use super::ui::Select;
use contracts::domain::a001_production_line::ProductionLine;
use leptos::prelude::*;

/// Production line picker; emits `None` when the placeholder is chosen.
#[component]
pub fn LineSelect(
    #[prop(into)] lines: Signal<Vec<ProductionLine>>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<Option<String>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        lines
            .get()
            .into_iter()
            .map(|line| (line.id.clone(), line.display_name()))
            .collect::<Vec<_>>()
    });
    let value = Signal::derive(move || selected.get().unwrap_or_default());

    view! {
        <Select
            label="Line"
            value=value
            options=options
            placeholder="— select line —"
            disabled=disabled
            on_change=Callback::new(move |id: String| {
                on_select.run((!id.is_empty()).then_some(id));
            })
        />
    }
}
