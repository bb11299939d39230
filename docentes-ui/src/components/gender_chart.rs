//! Gender Chart Component
//!
//! Bar chart of the per-gender tally, drawn on an HTML5 canvas.

use docentes::render::{BarChart, ValueAxis};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 300;

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 30.0;

/// Fraction of each bar slot filled by the bar
const BAR_FILL: f64 = 0.6;

/// Most tick labels drawn on the y axis
const MAX_TICK_LABELS: usize = 10;

/// Bar chart component. Redraws whenever `chart` changes.
#[component]
pub fn GenderChart(
    #[prop(into)]
    chart: Signal<Option<BarChart>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let canvas = canvas_ref.get();
        chart.with(|chart| {
            if let (Some(canvas), Some(chart)) = (canvas, chart) {
                draw_chart(&canvas, chart);
            }
        });
    });

    view! {
        <div class="chart-container mt-4" style="width: 50%; margin: 20px auto">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH.to_string()
                height=CANVAS_HEIGHT.to_string()
                style="width: 100%"
            />
        </div>
    }
}

/// A bar in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
struct BarRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Plot-area y coordinate for `value`
fn value_to_y(value: u64, axis: &ValueAxis, canvas_height: f64) -> f64 {
    let plot_height = canvas_height - MARGIN_TOP - MARGIN_BOTTOM;
    let span = (axis.max - axis.min).max(1) as f64;
    let clamped = value.clamp(axis.min, axis.max);
    MARGIN_TOP + plot_height * (1.0 - (clamped - axis.min) as f64 / span)
}

/// Bar rectangles, one per bar, in chart order
fn bar_rects(chart: &BarChart, canvas_width: f64, canvas_height: f64) -> Vec<BarRect> {
    let plot_width = canvas_width - MARGIN_LEFT - MARGIN_RIGHT;
    let slot = plot_width / chart.bars.len().max(1) as f64;
    let baseline = value_to_y(chart.axis.min, &chart.axis, canvas_height);

    chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let top = value_to_y(bar.value, &chart.axis, canvas_height);
            let width = slot * BAR_FILL;
            BarRect {
                x: MARGIN_LEFT + slot * i as f64 + (slot - width) / 2.0,
                y: top,
                width,
                height: baseline - top,
            }
        })
        .collect()
}

/// Label every n-th tick so at most `MAX_TICK_LABELS` are drawn
fn tick_stride(tick_count: usize) -> usize {
    tick_count.div_ceil(MAX_TICK_LABELS).max(1)
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, chart: &BarChart) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Legend
    ctx.set_fill_style(&"#333333".into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text(&chart.dataset_label, MARGIN_LEFT, 20.0);

    // Grid lines and y labels
    let ticks: Vec<u64> = chart.axis.ticks().collect();
    let stride = tick_stride(ticks.len());
    ctx.set_stroke_style(&"#e0e0e0".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for tick in ticks.iter().step_by(stride) {
        let y = value_to_y(*tick, &chart.axis, height);
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        ctx.set_fill_style(&"#666666".into());
        let _ = ctx.fill_text(&tick.to_string(), 10.0, y + 4.0);
    }

    // Bars and their labels
    for (bar, rect) in chart.bars.iter().zip(bar_rects(chart, width, height)) {
        ctx.set_fill_style(&bar.color.as_str().into());
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);

        ctx.set_fill_style(&"#333333".into());
        let label_width = ctx
            .measure_text(&bar.label)
            .map(|m| m.width())
            .unwrap_or(0.0);
        let _ = ctx.fill_text(
            &bar.label,
            rect.x + (rect.width - label_width) / 2.0,
            height - 10.0,
        );
    }
}
