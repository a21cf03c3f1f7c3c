use yew::prelude::*;

use super::theme::palette;
use crate::model::Place;
use crate::state::ExplorerAction;
use crate::util::stars;

#[derive(Properties, PartialEq, Clone)]
pub struct PlaceDetailsProps {
    pub place: Option<Place>,
    pub dark: bool,
    pub on_action: Callback<ExplorerAction>,
}

#[function_component(PlaceDetails)]
pub fn place_details(props: &PlaceDetailsProps) -> Html {
    let Some(place) = &props.place else {
        return html! {};
    };
    let pal = palette(props.dark);
    let close_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(ExplorerAction::CloseDetails))
    };
    let save_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(ExplorerAction::SaveSelected))
    };

    html! {<div id="place-details" style={format!("position:absolute; right:12px; top:12px; width:280px; background:{}; border:1px solid {}; border-radius:8px; padding:12px 16px; color:{}; z-index:6;", pal.panel, pal.border, pal.text)}>
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <h2 style="margin:0; font-size:17px;">{ place.name.clone() }</h2>
            <button onclick={close_cb} style="padding:2px 8px;">{"✕"}</button>
        </div>
        <div style={format!("margin-top:4px; font-size:12px; color:{};", pal.muted)}>{ place.address.clone() }</div>
        <div style="margin-top:6px;" title={format!("{:.1}", place.rating)}>{ stars(place.stars()) }</div>
        <div style={format!("margin-top:4px; font-size:11px; color:{};", place.category.color())}>{ place.category.tag() }</div>
        <p style="font-size:13px; line-height:1.4;">{ place.description.clone() }</p>
        <button onclick={save_cb} style="width:100%;">{"Save Place"}</button>
    </div>}
}
