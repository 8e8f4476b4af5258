//! Browser tests for the canvas-backed chart surface.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlCanvasElement};

use fleet_dashboard::render::{CanvasSurface, ChartSet, Surface};
use fleet_dashboard::stats::ChartPercentage;

wasm_bindgen_test_configure!(run_in_browser);

fn container_with_canvases(count: usize) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    for _ in 0..count {
        let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
        canvas.set_width(160);
        canvas.set_height(160);
        container.append_child(&canvas).unwrap();
    }
    container
}

fn stat(label: &str, value: u8) -> ChartPercentage {
    ChartPercentage {
        id: label.to_lowercase(),
        label: label.to_string(),
        value,
    }
}

#[wasm_bindgen_test]
fn collects_every_canvas_in_order() {
    let container = container_with_canvases(3);
    let surfaces = CanvasSurface::collect(&container);

    assert_eq!(surfaces.len(), 3);
    assert_eq!(surfaces[0].size(), (160.0, 160.0));
}

#[wasm_bindgen_test]
fn empty_container_has_no_surfaces() {
    let container = container_with_canvases(0);
    assert!(CanvasSurface::collect(&container).is_empty());
}

#[wasm_bindgen_test]
fn rebuild_draws_one_chart_per_canvas() {
    let container = container_with_canvases(2);
    let mut charts = ChartSet::new();

    let created = charts.rebuild(
        CanvasSurface::collect(&container),
        &[stat("Trucks", 25), stat("Vans", 80)],
    );
    assert_eq!(created, 2);
    assert_eq!(charts.charts()[1].center_text(), "80%");

    let created = charts.rebuild(CanvasSurface::collect(&container), &[stat("Trucks", 40)]);
    assert_eq!(created, 1);
    assert_eq!(charts.len(), 1);
    assert_eq!(charts.charts()[0].percentage(), 40);
}
