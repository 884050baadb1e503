//! Line settings form: supervisor, shift start and daily target.

use crate::domain::a001_production_line::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::LineSelect;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_production_line::{LineSettings, ProductionLine, UpdateLineSettingsRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Result of a save, shown in a modal
#[derive(Debug, Clone, PartialEq)]
struct SaveOutcome {
    ok: bool,
    message: String,
}

#[component]
pub fn LineSettingsDetails() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let lines = RwSignal::new(Vec::<ProductionLine>::new());
    spawn_local(async move {
        match api::fetch_lines().await {
            Ok(data) => lines.set(data),
            Err(e) => log::error!("Failed to load lines: {}", e),
        }
    });

    // RwSignal for form fields (two-way binding with Thaw)
    let supervisor = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let target = RwSignal::new(String::new());

    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let outcome = RwSignal::new(None::<SaveOutcome>);

    let fill = move |settings: &LineSettings| {
        supervisor.set(settings.supervisor.clone());
        start_time.set(settings.start_time.clone());
        target.set(settings.target.to_string());
    };

    // Reload whenever the selected line changes
    Effect::new(move |_| {
        let Some(line_id) = ctx.selected_line.get() else {
            fill(&LineSettings::default());
            return;
        };
        loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            match api::fetch_settings(&line_id).await {
                Ok(settings) => fill(&settings),
                Err(e) => {
                    log::error!("Failed to load settings for {}: {}", line_id, e);
                    load_error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let validated = Memo::new(move |_| {
        UpdateLineSettingsRequest::from_form(&supervisor.get(), &start_time.get(), &target.get())
            .map_err(|e| e.to_string())
    });

    let can_save = Signal::derive(move || {
        ctx.selected_line.with(Option::is_some)
            && validated.with(Result::is_ok)
            && !saving.get()
            && !loading.get()
    });

    let save = move |_| {
        let Some(line_id) = ctx.selected_line.get_untracked() else {
            return;
        };
        let Ok(request) = validated.get_untracked() else {
            return;
        };
        saving.set(true);
        spawn_local(async move {
            let result = api::save_settings(&line_id, &request).await;
            let next = match result {
                Ok(resp) if resp.success => SaveOutcome {
                    ok: true,
                    message: if resp.message.is_empty() {
                        format!("Settings of line {} saved", line_id)
                    } else {
                        resp.message
                    },
                },
                Ok(resp) => SaveOutcome {
                    ok: false,
                    message: if resp.message.is_empty() {
                        "The server rejected the settings".to_string()
                    } else {
                        resp.message
                    },
                },
                Err(e) => {
                    log::error!("Failed to save settings for {}: {}", line_id, e);
                    SaveOutcome {
                        ok: false,
                        message: e.to_string(),
                    }
                }
            };
            if next.ok {
                // Keep the cached line list in step with what was saved
                lines.update(|all| {
                    if let Some(line) = all.iter_mut().find(|l| l.id == line_id) {
                        line.supervisor = Some(request.supervisor.clone());
                        line.start_time = Some(request.start_time.clone());
                        line.target = request.target;
                    }
                });
            }
            outcome.set(Some(next));
            saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="a001_production_line--detail" category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("settings")}
                    <h1 class="page__title">"Line settings"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=save
                        disabled=Signal::derive(move || !can_save.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="form" style="max-width: 480px;">
                    <LineSelect
                        lines=lines
                        selected=Signal::derive(move || ctx.selected_line.get())
                        on_select=Callback::new(move |id| ctx.select_line(id))
                    />

                    {move || load_error.get().map(|err| view! {
                        <div class="alert alert--error">{format!("Failed to load settings: {err}")}</div>
                    })}

                    <Show when=move || loading.get()>
                        <Spinner label="Loading settings..." />
                    </Show>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Supervisor"</Label>
                        <Input value=supervisor placeholder="Name of the line supervisor" />

                        <Label>"Start time"</Label>
                        <Input value=start_time input_type=InputType::Time placeholder="HH:MM" />

                        <Label>"Target"</Label>
                        <Input value=target input_type=InputType::Number placeholder="Pieces per day" />
                    </Flex>

                    {move || {
                        let has_line = ctx.selected_line.with(Option::is_some);
                        validated.get().err().filter(|_| has_line).map(|err| view! {
                            <div class="form__error">{err}</div>
                        })
                    }}
                </div>
            </div>

            {move || outcome.get().map(|o| {
                let title = if o.ok { "Saved" } else { "Not saved" };
                view! {
                    <Modal title=title on_close=Callback::new(move |_| outcome.set(None))>
                        <div class={if o.ok { "alert alert--success" } else { "alert alert--error" }}>
                            {o.message.clone()}
                        </div>
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
