//! SVG pie chart for counter distributions
use crate::shared::number_format::format_count;
use leptos::prelude::*;
use std::f64::consts::PI;

const RADIUS: f64 = 80.0;
const CENTER: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub color: String,
}

/// Computed arc of a slice, angles in radians starting at 12 o'clock
#[derive(Debug, Clone, PartialEq)]
struct Arc {
    start: f64,
    end: f64,
    share: f64,
}

fn compute_arcs(slices: &[PieSlice]) -> Vec<Arc> {
    let total: u64 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = 0.0;
    slices
        .iter()
        .map(|s| {
            let share = s.value as f64 / total as f64;
            let end = start + share * 2.0 * PI;
            let arc = Arc { start, end, share };
            start = end;
            arc
        })
        .collect()
}

fn point(angle: f64) -> (f64, f64) {
    (
        CENTER + RADIUS * angle.sin(),
        CENTER - RADIUS * angle.cos(),
    )
}

fn arc_path(arc: &Arc) -> String {
    // A full circle cannot be drawn as a single arc command
    if arc.share >= 0.9999 {
        return format!(
            "M {c} {top} A {r} {r} 0 1 1 {c} {bottom} A {r} {r} 0 1 1 {c} {top} Z",
            c = CENTER,
            r = RADIUS,
            top = CENTER - RADIUS,
            bottom = CENTER + RADIUS,
        );
    }
    let (x1, y1) = point(arc.start);
    let (x2, y2) = point(arc.end);
    let large = if arc.end - arc.start > PI { 1 } else { 0 };
    format!(
        "M {c} {c} L {x1:.2} {y1:.2} A {r} {r} 0 {large} 1 {x2:.2} {y2:.2} Z",
        c = CENTER,
        r = RADIUS,
    )
}

#[component]
pub fn PieChart(
    #[prop(into)] title: String,
    #[prop(into)] slices: Signal<Vec<PieSlice>>,
) -> impl IntoView {
    let paths = move || {
        let slices = slices.get();
        compute_arcs(&slices)
            .into_iter()
            .zip(slices)
            .filter(|(arc, _)| arc.share > 0.0)
            .map(|(arc, slice)| {
                let tooltip = format!("{}: {}", slice.label, format_count(slice.value));
                view! {
                    <path d=arc_path(&arc) fill=slice.color>
                        <title>{tooltip}</title>
                    </path>
                }
            })
            .collect_view()
    };

    let legend = move || {
        let slices = slices.get();
        let total: u64 = slices.iter().map(|s| s.value).sum();
        slices
            .into_iter()
            .map(|slice| {
                let pct = if total > 0 {
                    format!("{:.1}%", slice.value as f64 * 100.0 / total as f64)
                } else {
                    "—".to_string()
                };
                let swatch = format!("background: {}", slice.color);
                view! {
                    <li class="pie-chart__legend-item">
                        <span class="pie-chart__swatch" style=swatch></span>
                        <span class="pie-chart__label">{slice.label}</span>
                        <span class="pie-chart__value">{format_count(slice.value)}" · "{pct}</span>
                    </li>
                }
            })
            .collect_view()
    };

    let is_empty = move || slices.with(|s| s.iter().all(|s| s.value == 0));

    view! {
        <div class="pie-chart">
            <div class="pie-chart__title">{title}</div>
            <Show
                when=move || !is_empty()
                fallback=|| view! { <div class="pie-chart__empty">"No data yet"</div> }
            >
                <svg class="pie-chart__svg" viewBox="0 0 200 200" width="200" height="200">
                    {paths}
                </svg>
            </Show>
            <ul class="pie-chart__legend">{legend}</ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(value: u64) -> PieSlice {
        PieSlice {
            label: "x".into(),
            value,
            color: "red".into(),
        }
    }

    #[test]
    fn test_arcs_empty_when_total_zero() {
        assert!(compute_arcs(&[slice(0), slice(0)]).is_empty());
    }

    #[test]
    fn test_arcs_cover_full_circle() {
        let arcs = compute_arcs(&[slice(1), slice(1), slice(2)]);
        assert_eq!(arcs.len(), 3);
        assert!((arcs[0].share - 0.25).abs() < 1e-9);
        assert!((arcs[2].share - 0.5).abs() < 1e-9);
        assert!((arcs[2].end - 2.0 * PI).abs() < 1e-9);
        assert!((arcs[1].start - arcs[0].end).abs() < 1e-9);
    }

    #[test]
    fn test_full_slice_path_is_circle() {
        let arcs = compute_arcs(&[slice(5), slice(0)]);
        let path = arc_path(&arcs[0]);
        assert!(path.starts_with("M 100 20 A"));
    }
}
