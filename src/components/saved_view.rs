use yew::prelude::*;

use super::theme::palette;
use crate::model::Place;
use crate::state::ExplorerAction;
use crate::util::{stars, truncate};

const CARD_DESCRIPTION_CHARS: usize = 100;

#[derive(Properties, PartialEq, Clone)]
pub struct SavedViewProps {
    pub places: Vec<Place>,
    pub dark: bool,
    pub on_action: Callback<ExplorerAction>,
}

#[function_component(SavedView)]
pub fn saved_view(props: &SavedViewProps) -> Html {
    let pal = palette(props.dark);
    if props.places.is_empty() {
        return html! {<div style={format!("padding:24px; color:{};", pal.muted)}>
            <p class="empty-state">{"You haven't saved any places yet."}</p>
        </div>};
    }

    let card = |index: usize, place: &Place| {
        let view_cb = {
            let cb = props.on_action.clone();
            Callback::from(move |_| cb.emit(ExplorerAction::ViewSaved(index)))
        };
        let remove_cb = {
            let cb = props.on_action.clone();
            Callback::from(move |_| cb.emit(ExplorerAction::RemoveSaved(index)))
        };
        html! {<div class="place-card" style={format!("background:{}; border:1px solid {}; border-left:4px solid {}; border-radius:8px; padding:12px 14px; display:flex; flex-direction:column; gap:6px;", pal.panel, pal.border, place.category.color())}>
            <h3 style="margin:0; font-size:16px;">{ place.name.clone() }</h3>
            <p class="address" style={format!("margin:0; font-size:12px; color:{};", pal.muted)}>{ place.address.clone() }</p>
            <div class="rating">{ stars(place.stars()) }</div>
            <p style="margin:0; font-size:13px;">{ truncate(&place.description, CARD_DESCRIPTION_CHARS) }</p>
            <div class="actions" style="display:flex; gap:8px; margin-top:4px;">
                <button class="view-btn" onclick={view_cb}>{"View on Map"}</button>
                <button class="remove-btn" onclick={remove_cb}>{"Remove"}</button>
            </div>
        </div>}
    };

    html! {<div class="saved-places-container" style={format!("padding:16px; display:grid; grid-template-columns:repeat(auto-fill, minmax(260px, 1fr)); gap:12px; color:{};", pal.text)}>
        { for props.places.iter().enumerate().map(|(i, p)| card(i, p)) }
    </div>}
}
