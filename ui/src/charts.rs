//! Hand-rolled SVG charts.
//!
//! The backend computes every series; these components only map values to
//! rectangles and arcs. Two shapes cover the app: a grouped bar chart for
//! income vs. expenses over time and a donut for category breakdowns.

use dioxus::prelude::*;

/// One month on the bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarPoint {
    pub label: String,
    pub income: f64,
    pub expenses: f64,
}

const BAR_WIDTH: f64 = 18.0;
const BAR_GAP: f64 = 6.0;
const GROUP_GAP: f64 = 28.0;
const CHART_HEIGHT: f64 = 160.0;

#[component]
pub fn BarChart(points: Vec<BarPoint>) -> Element {
    if points.is_empty() {
        return rsx! {
            p { class: "chart-empty", "No data for this period yet." }
        };
    }

    let max = points
        .iter()
        .flat_map(|point| [point.income, point.expenses])
        .fold(1.0_f64, f64::max);

    let group_width = BAR_WIDTH * 2.0 + BAR_GAP + GROUP_GAP;
    let width = group_width * points.len() as f64;
    let total_height = CHART_HEIGHT + 24.0;

    rsx! {
        svg {
            class: "bar-chart",
            view_box: "0 0 {width} {total_height}",
            role: "img",
            for (index, point) in points.iter().enumerate() {
                {
                    let x = index as f64 * group_width + GROUP_GAP / 2.0;
                    let income_height = point.income / max * CHART_HEIGHT;
                    let expense_height = point.expenses / max * CHART_HEIGHT;
                    let label_x = x + BAR_WIDTH + BAR_GAP / 2.0;
                    rsx! {
                        rect {
                            x: "{x}",
                            y: "{CHART_HEIGHT - income_height}",
                            width: "{BAR_WIDTH}",
                            height: "{income_height}",
                            rx: "2",
                            fill: "#10b981",
                        }
                        rect {
                            x: "{x + BAR_WIDTH + BAR_GAP}",
                            y: "{CHART_HEIGHT - expense_height}",
                            width: "{BAR_WIDTH}",
                            height: "{expense_height}",
                            rx: "2",
                            fill: "#ef4444",
                        }
                        text {
                            x: "{label_x}",
                            y: "{CHART_HEIGHT + 16.0}",
                            text_anchor: "middle",
                            class: "bar-chart__label",
                            "{point.label}"
                        }
                    }
                }
            }
        }
    }
}

/// One donut segment.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

const DONUT_RADIUS: f64 = 60.0;
const DONUT_STROKE: f64 = 26.0;

#[component]
pub fn DonutChart(slices: Vec<DonutSlice>) -> Element {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    if total <= 0.0 {
        return rsx! {
            p { class: "chart-empty", "Nothing to break down yet." }
        };
    }

    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let size = (DONUT_RADIUS + DONUT_STROKE) * 2.0;
    let center = DONUT_RADIUS + DONUT_STROKE;

    // Precompute each segment's dash pattern and its offset along the ring.
    let mut offset = 0.0;
    let segments: Vec<(String, String, String)> = slices
        .iter()
        .map(|slice| {
            let dash = slice.value / total * circumference;
            let segment = (
                slice.color.clone(),
                format!("{dash} {}", circumference - dash),
                format!("{}", -offset),
            );
            offset += dash;
            segment
        })
        .collect();

    rsx! {
        div {
            class: "donut",
            svg {
                class: "donut__svg",
                view_box: "0 0 {size} {size}",
                role: "img",
                for (color, dasharray, dashoffset) in segments {
                    circle {
                        cx: "{center}",
                        cy: "{center}",
                        r: "{DONUT_RADIUS}",
                        fill: "none",
                        stroke: "{color}",
                        stroke_width: "{DONUT_STROKE}",
                        stroke_dasharray: "{dasharray}",
                        stroke_dashoffset: "{dashoffset}",
                        transform: "rotate(-90 {center} {center})",
                    }
                }
            }
            ul {
                class: "donut__legend",
                for slice in slices.iter() {
                    li {
                        key: "{slice.label}",
                        span {
                            class: "donut__swatch",
                            style: "background: {slice.color}",
                        }
                        span { "{slice.label}" }
                    }
                }
            }
        }
    }
}
