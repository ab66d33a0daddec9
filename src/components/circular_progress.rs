//! Circular Progress Component
//!
//! SVG ring showing a percentage.

use leptos::prelude::*;

/// Ring geometry: (radius, circumference, dash offset) for a percentage
fn ring_geometry(value: f64, size: f64, stroke_width: f64) -> (f64, f64, f64) {
    let radius = (size - stroke_width) / 2.0;
    let circumference = radius * 2.0 * std::f64::consts::PI;
    let clamped = value.clamp(0.0, 100.0);
    (radius, circumference, circumference - clamped / 100.0 * circumference)
}

#[component]
pub fn CircularProgress(
    #[prop(into)] value: Signal<f64>,
    #[prop(default = 120.0)] size: f64,
    #[prop(default = 10.0)] stroke_width: f64,
) -> impl IntoView {
    let center = size / 2.0;
    let radius = ring_geometry(0.0, size, stroke_width).0;
    let circumference = ring_geometry(0.0, size, stroke_width).1;
    let offset = move || ring_geometry(value.get(), size, stroke_width).2;

    view! {
        <div class="circular-progress" style=format!("width: {}px; height: {}px;", size, size)>
            <svg width=size height=size class="ring">
                <circle
                    cx=center cy=center r=radius
                    fill="none"
                    class="ring-track"
                    stroke-width=stroke_width
                />
                <circle
                    cx=center cy=center r=radius
                    fill="none"
                    class="ring-value"
                    stroke-width=stroke_width
                    stroke-dasharray=circumference
                    stroke-dashoffset=offset
                    stroke-linecap="round"
                />
            </svg>
            <span class="ring-label">{move || format!("{:.0}%", value.get())}</span>
        </div>
    }
}
