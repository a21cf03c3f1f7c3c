use std::f64::consts::PI;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::{Extent, Marker, Point};
use crate::state::ExplorerAction;

const MARKER_RADIUS: f64 = 12.0;
const BLOCK_SIZE: f64 = 100.0;
const BLOCK_PADDING: f64 = 10.0;
// Buildings are decorative; a fixed seed keeps them from jumping on every redraw.
const BUILDING_SEED: u64 = 0x5eed;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub markers: Vec<Marker>,
    pub dark: bool,
    pub on_action: Callback<ExplorerAction>,
}

#[derive(Default)]
struct Scene {
    markers: Vec<Marker>,
    dark: bool,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let scene = use_mut_ref(Scene::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Effect: latest markers/theme into the scene, then redraw
    {
        let scene = scene.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with((props.markers.clone(), props.dark), move |(markers, dark)| {
            *scene.borrow_mut() = Scene { markers: markers.clone(), dark: *dark };
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }

    // Main mount effect: size the canvas, build the draw closure, follow window resizes
    {
        let canvas_ref = canvas_ref.clone();
        let scene = scene.clone();
        let draw_ref = draw_ref.clone();
        let on_action = props.on_action.clone();
        use_effect_with((), move |_| -> Box<dyn FnOnce()> {
            let (Some(window), Some(canvas)) = (web_sys::window(), canvas_ref.cast::<HtmlCanvasElement>()) else {
                tracing::warn!("map canvas not mounted");
                return Box::new(|| ());
            };

            let fit_canvas = {
                let canvas = canvas.clone();
                move || -> Option<Extent> {
                    let parent = canvas.parent_element()?;
                    let (w, h) = (parent.client_width() as f64, parent.client_height() as f64);
                    // Not laid out yet; keep the last real size.
                    if w <= 0.0 || h <= 0.0 {
                        return None;
                    }
                    canvas.set_width(w as u32);
                    canvas.set_height(h as u32);
                    Some(Extent::new(w, h))
                }
            };

            let draw: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let scene = scene.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    else {
                        return;
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    let scene = scene.borrow();
                    draw_map(&ctx, w, h, scene.dark);
                    draw_markers(&ctx, &scene.markers, scene.dark);
                })
            };
            *draw_ref.borrow_mut() = Some(draw.clone());

            if let Some(extent) = fit_canvas() {
                on_action.emit(ExplorerAction::Resize(extent));
                // Stock markers were laid out before the canvas had a size.
                on_action.emit(ExplorerAction::ResetMap);
            }
            draw();

            let resize_cb = {
                let fit_canvas = fit_canvas.clone();
                let draw = draw.clone();
                let on_action = on_action.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    if let Some(extent) = fit_canvas() {
                        on_action.emit(ExplorerAction::Resize(extent));
                        draw();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .is_err()
            {
                tracing::warn!("could not listen for window resize");
            }

            Box::new(move || {
                let _ = window.remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                *draw_ref.borrow_mut() = None;
            })
        });
    }

    let onclick = {
        let cb = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            cb.emit(ExplorerAction::Click(Point::new(e.offset_x() as f64, e.offset_y() as f64)));
        })
    };

    html! {
        <canvas ref={canvas_ref} id="map-canvas" {onclick} style="display:block; width:100%; height:100%; cursor:pointer;"></canvas>
    }
}

fn draw_map(ctx: &CanvasRenderingContext2d, w: f64, h: f64, dark: bool) {
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str(if dark { "#1a1a1a" } else { "#e6e6e6" });
    ctx.fill_rect(0.0, 0.0, w, h);

    // grid
    ctx.set_stroke_style_str(if dark { "#333" } else { "#ccc" });
    ctx.set_line_width(1.0);
    let mut x = 0.0;
    while x < w {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        ctx.stroke();
        x += 50.0;
    }
    let mut y = 0.0;
    while y < h {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        ctx.stroke();
        y += 50.0;
    }

    // main roads
    ctx.set_stroke_style_str(if dark { "#555" } else { "#999" });
    ctx.set_line_width(5.0);
    ctx.begin_path();
    ctx.move_to(0.0, h / 2.0);
    ctx.line_to(w, h / 2.0);
    ctx.stroke();
    ctx.begin_path();
    ctx.move_to(w / 2.0, 0.0);
    ctx.line_to(w / 2.0, h);
    ctx.stroke();

    // lake
    ctx.set_fill_style_str(if dark { "#1a3c5e" } else { "#a8d5ff" });
    ctx.begin_path();
    ctx.arc(w * 0.7, h * 0.3, 80.0, 0.0, PI * 2.0).ok();
    ctx.fill();

    // park
    ctx.set_fill_style_str(if dark { "#1e4d2b" } else { "#90ee90" });
    ctx.fill_rect(w * 0.1, h * 0.6, 150.0, 100.0);

    draw_city_blocks(ctx, w, h, dark);
    draw_compass(ctx, 60.0, 60.0, 40.0, dark);
    draw_scale(ctx, w - 150.0, h - 30.0, dark);
}

fn block_is_clear(x: f64, y: f64, w: f64, h: f64) -> bool {
    let on_road = (x - w / 2.0).abs() < 30.0 || (y - h / 2.0).abs() < 30.0;
    let in_lake = Point::new(x, y).distance_to(Point::new(w * 0.7, h * 0.3)) < 80.0;
    let in_park = x > w * 0.1 - 10.0 && x < w * 0.1 + 160.0 && y > h * 0.6 - 10.0 && y < h * 0.6 + 110.0;
    !(on_road || in_lake || in_park)
}

fn draw_city_blocks(ctx: &CanvasRenderingContext2d, w: f64, h: f64, dark: bool) {
    let block_color = if dark { "#2c2c2c" } else { "#d9d9d9" };
    let building_color = if dark { "#3c3c3c" } else { "#bfbfbf" };
    let mut rng = StdRng::seed_from_u64(BUILDING_SEED);
    let mut x = 50.0;
    while x < w - 50.0 {
        let mut y = 50.0;
        while y < h - 50.0 {
            if block_is_clear(x, y, w, h) {
                ctx.set_fill_style_str(block_color);
                ctx.fill_rect(x, y, BLOCK_SIZE, BLOCK_SIZE);
                ctx.set_fill_style_str(building_color);
                let buildings = rng.gen_range(2..=4);
                for _ in 0..buildings {
                    let bx = x + rng.gen_range(0.0..BLOCK_SIZE - 30.0);
                    let by = y + rng.gen_range(0.0..BLOCK_SIZE - 30.0);
                    let bw = rng.gen_range(10.0..30.0);
                    let bh = rng.gen_range(10.0..30.0);
                    ctx.fill_rect(bx, by, bw, bh);
                }
            }
            y += BLOCK_SIZE + BLOCK_PADDING;
        }
        x += BLOCK_SIZE + BLOCK_PADDING;
    }
}

fn draw_compass(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, dark: bool) {
    ctx.set_fill_style_str(if dark { "rgba(255, 255, 255, 0.1)" } else { "rgba(0, 0, 0, 0.1)" });
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, PI * 2.0).ok();
    ctx.fill();
    ctx.set_fill_style_str(if dark { "#333" } else { "#fff" });
    ctx.begin_path();
    ctx.arc(x, y, radius - 5.0, 0.0, PI * 2.0).ok();
    ctx.fill();

    ctx.set_fill_style_str(if dark { "#fff" } else { "#000" });
    ctx.set_font("bold 14px Roboto, sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for (label, dx, dy) in [("N", 0.0, -1.0), ("S", 0.0, 1.0), ("E", 1.0, 0.0), ("W", -1.0, 0.0)] {
        ctx.fill_text(label, x + dx * (radius - 15.0), y + dy * (radius - 15.0)).ok();
    }

    ctx.set_line_width(2.0);
    ctx.set_stroke_style_str("#e74c3c");
    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.line_to(x, y - radius + 10.0);
    ctx.stroke();
    ctx.set_stroke_style_str("#3498db");
    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.line_to(x, y + radius - 10.0);
    ctx.stroke();
}

fn draw_scale(ctx: &CanvasRenderingContext2d, x: f64, y: f64, dark: bool) {
    let width = 100.0;
    let ink = if dark { "#fff" } else { "#000" };
    ctx.set_fill_style_str(ink);
    ctx.set_stroke_style_str(ink);
    ctx.set_font("12px Roboto, sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.line_to(x + width, y);
    ctx.stroke();
    for i in 0..=4 {
        let tick_x = x + width / 4.0 * i as f64;
        ctx.begin_path();
        ctx.move_to(tick_x, y);
        ctx.line_to(tick_x, y - 5.0);
        ctx.stroke();
    }
    ctx.fill_text("0", x, y - 10.0).ok();
    ctx.fill_text("500m", x + width, y - 10.0).ok();
}

fn draw_markers(ctx: &CanvasRenderingContext2d, markers: &[Marker], dark: bool) {
    for marker in markers {
        let Point { x, y } = marker.position;

        // shadow
        ctx.set_fill_style_str("rgba(0, 0, 0, 0.3)");
        ctx.begin_path();
        ctx.arc(x, y + 2.0, MARKER_RADIUS, 0.0, PI * 2.0).ok();
        ctx.fill();

        ctx.set_fill_style_str(marker.place.category.color());
        ctx.begin_path();
        ctx.arc(x, y, MARKER_RADIUS, 0.0, PI * 2.0).ok();
        ctx.fill();
        ctx.set_stroke_style_str(if dark { "#fff" } else { "#000" });
        ctx.set_line_width(2.0);
        ctx.stroke();

        ctx.set_fill_style_str("#fff");
        ctx.begin_path();
        ctx.arc(x, y, 5.0, 0.0, PI * 2.0).ok();
        ctx.fill();

        // label on a translucent plate
        let label = marker.place.name.as_str();
        ctx.set_font("bold 12px Roboto, sans-serif");
        let text_w = ctx.measure_text(label).map(|m| m.width()).unwrap_or(label.len() as f64 * 7.0);
        ctx.set_fill_style_str(if dark { "rgba(0, 0, 0, 0.7)" } else { "rgba(255, 255, 255, 0.7)" });
        ctx.fill_rect(x - text_w / 2.0 - 5.0, y + 15.0, text_w + 10.0, 20.0);
        ctx.set_fill_style_str(if dark { "#fff" } else { "#000" });
        ctx.set_text_align("center");
        ctx.set_text_baseline("alphabetic");
        ctx.fill_text(label, x, y + 30.0).ok();
    }
}
