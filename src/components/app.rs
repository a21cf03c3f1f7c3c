use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    filter_bar::FilterBar, map_view::MapView, notification::Notification,
    place_details::PlaceDetails, saved_view::SavedView, theme::palette, top_bar::TopBar,
};
use crate::config::ExplorerConfig;
use crate::controller::ViewController;
use crate::model::{Extent, View};
use crate::state::{AppState, ExplorerAction, ExplorerState};
use crate::storage::LocalStorage;

fn browser_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(|| -> AppState {
        let storage = LocalStorage::open();
        let config = ExplorerConfig::load(&storage);
        let rng = StdRng::seed_from_u64(browser_seed());
        ExplorerState::new(ViewController::new(storage, rng, config, Extent::default()))
    });

    let dispatch = {
        let state = state.clone();
        Callback::from(move |action: ExplorerAction| state.dispatch(action))
    };

    let (view, dark, selected, saved, markers, notification_ms) = {
        let ctl = state.ctl.borrow();
        (
            ctl.view(),
            ctl.is_dark_theme(),
            ctl.selected().cloned(),
            ctl.saved_places().to_vec(),
            ctl.markers().to_vec(),
            ctl.config().notification_ms,
        )
    };

    // Mirror the theme onto <body> so the page background follows it
    use_effect_with(dark, move |dark| {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            body.set_class_name(if *dark { "dark-theme" } else { "" });
            let pal = palette(*dark);
            let _ = body.set_attribute(
                "style",
                &format!("margin:0; background:{}; color:{}; font-family:Roboto, sans-serif;", pal.background, pal.text),
            );
        }
        || ()
    });

    // Auto-dismiss the current notice
    {
        let dispatch = dispatch.clone();
        let notice_id = state.notice.as_ref().map(|n| n.id);
        use_effect_with(notice_id, move |notice_id| -> Box<dyn FnOnce()> {
            let (Some(id), Some(window)) = (*notice_id, web_sys::window()) else {
                return Box::new(|| ());
            };
            let hide = Closure::wrap(Box::new(move || dispatch.emit(ExplorerAction::DismissNotice(id))) as Box<dyn FnMut()>);
            let handle = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(hide.as_ref().unchecked_ref(), notification_ms as i32)
                .ok();
            Box::new(move || {
                if let Some(h) = handle {
                    window.clear_timeout_with_handle(h);
                }
                drop(hide);
            })
        });
    }

    let pal = palette(dark);
    // The map stays mounted and laid out under the saved list, so the canvas keeps
    // its markers and window resizes still reach it while it is covered.
    let map_visibility = if view == View::Map { "visible" } else { "hidden" };
    let saved_content = if view == View::Saved {
        html! {<div id="saved-view" style={format!("position:absolute; inset:0; overflow:auto; z-index:10; background:{};", pal.background)}>
            <h2 style="margin:16px 16px 0 16px;">{"Saved Places"}</h2>
            <SavedView places={saved} dark={dark} on_action={dispatch.clone()} />
        </div>}
    } else {
        html! {}
    };

    html! {<div id="root" style={format!("display:flex; flex-direction:column; width:100vw; height:100vh; background:{}; color:{};", pal.background, pal.text)}>
        <TopBar view={view} dark={dark} on_action={dispatch.clone()} />
        <div id="content" style="position:relative; flex:1; overflow:hidden;">
            <div id="map-view" style={format!("position:absolute; inset:0; visibility:{};", map_visibility)}>
                <MapView markers={markers} dark={dark} on_action={dispatch.clone()} />
                <FilterBar dark={dark} on_action={dispatch.clone()} />
                <PlaceDetails place={selected} dark={dark} on_action={dispatch.clone()} />
            </div>
            { saved_content }
        </div>
        <Notification notice={state.notice.clone()} />
    </div>}
}
