use crate::shared::icons::icon;
use crate::shared::number_format::{format_count, format_percent};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize)
        }
        ValueFormat::Percent { decimals } => format_percent(Some(val), *decimals as usize),
        ValueFormat::Integer => format_count(val.max(0.0).round() as u64),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(into)]
    status: Signal<IndicatorStatus>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Accent colour for the icon
    #[prop(into, optional)]
    accent: Option<String>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    let icon_style = accent.map(|c| format!("color: {c}")).unwrap_or_default();

    view! {
        <div class=status_class>
            <div class="stat-card__icon" style=icon_style>
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1234.0, &ValueFormat::Integer), "1 234");
        assert_eq!(format_value(-3.0, &ValueFormat::Integer), "0");
        assert_eq!(format_value(87.25, &ValueFormat::Percent { decimals: 1 }), "87.2%");
        assert_eq!(format_value(2.5, &ValueFormat::Number { decimals: 2 }), "2.50");
    }
}
