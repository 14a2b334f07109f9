//! Analytics Bar Chart
//!
//! Computes a five-bar layout for [`Aggregated`] and paints it on a 2D
//! canvas. Layout is pure so it can be checked without a browser.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::models::Aggregated;

pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 320.0;
const PADDING_X: f64 = 20.0;
const PADDING_TOP: f64 = 30.0;
const PADDING_BOTTOM: f64 = 40.0;
const BAR_FILL: f64 = 0.6;

/// Multiplier for every series except sum, so small statistics stay visible next to the total
pub const SERIES_SCALE: f64 = 10.0;

const BAR_COLORS: [&str; 5] = ["#4e79a7", "#59a14f", "#f28e2b", "#e15759", "#76b7b2"];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub caption: &'static str,
    /// Original, unscaled value as displayed
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

fn plot_height() -> f64 {
    CANVAS_HEIGHT - PADDING_TOP - PADDING_BOTTOM
}

/// Bars in display order: sum, average, median, count, percentile_90
pub fn layout(data: &Aggregated) -> Vec<ChartBar> {
    let series: [(&'static str, f64, String); 5] = [
        ("Сумма", data.sum as f64, data.sum.to_string()),
        ("Среднее", data.average * SERIES_SCALE, format!("{:.2}", data.average)),
        ("Медиана", data.median * SERIES_SCALE, format!("{:.2}", data.median)),
        ("Количество", data.count as f64 * SERIES_SCALE, data.count.to_string()),
        ("90-й перцентиль", data.percentile_90 * SERIES_SCALE, format!("{:.2}", data.percentile_90)),
    ];

    let max = series.iter().map(|(_, v, _)| v.abs()).fold(0.0_f64, f64::max);
    let slot = (CANVAS_WIDTH - 2.0 * PADDING_X) / series.len() as f64;
    let width = slot * BAR_FILL;
    let baseline = PADDING_TOP + plot_height();

    series
        .into_iter()
        .enumerate()
        .map(|(i, (caption, scaled, label))| {
            let height = if max > 0.0 { scaled.abs() / max * plot_height() } else { 0.0 };
            ChartBar {
                caption,
                label,
                x: PADDING_X + i as f64 * slot + (slot - width) / 2.0,
                y: baseline - height,
                width,
                height,
            }
        })
        .collect()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

pub fn draw(canvas: &HtmlCanvasElement, bars: &[ChartBar]) -> Result<(), JsValue> {
    let ctx = context_2d(canvas)?;
    ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    let baseline = PADDING_TOP + plot_height();
    ctx.set_stroke_style_str("#999");
    ctx.begin_path();
    ctx.move_to(PADDING_X, baseline);
    ctx.line_to(CANVAS_WIDTH - PADDING_X, baseline);
    ctx.stroke();

    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (bar, color) in bars.iter().zip(BAR_COLORS.iter().cycle()) {
        let center = bar.x + bar.width / 2.0;
        ctx.set_fill_style_str(color);
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);

        ctx.set_fill_style_str("#333");
        ctx.fill_text(&bar.label, center, bar.y - 6.0)?;
        ctx.fill_text(bar.caption, center, baseline + 18.0)?;
    }
    Ok(())
}
