use leptos::html::Canvas;
use leptos::prelude::*;

use crate::chart::{self, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::models::Aggregated;

/// Canvas redrawn whenever `data` changes
#[component]
pub fn BarChart(#[prop(into)] data: Signal<Aggregated>) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let bars = chart::layout(&data.get());
        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = chart::draw(&canvas, &bars) {
                web_sys::console::error_1(&format!("[CHART] draw failed: {:?}", e).into());
            }
        }
    });

    view! {
        <canvas
            class="analytics-chart"
            node_ref=canvas_ref
            width=CANVAS_WIDTH.to_string()
            height=CANVAS_HEIGHT.to_string()
        />
    }
}
