use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use super::theme::palette;
use crate::model::View;
use crate::state::ExplorerAction;

#[derive(Properties, PartialEq, Clone)]
pub struct TopBarProps {
    pub view: View,
    pub dark: bool,
    pub on_action: Callback<ExplorerAction>,
}

#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    let term = use_state(String::new);
    let pal = palette(props.dark);

    let on_input = {
        let term = term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            term.set(input.value());
        })
    };
    let search_btn = {
        let term = term.clone();
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(ExplorerAction::Search((*term).clone())))
    };
    let on_keypress = {
        let term = term.clone();
        let cb = props.on_action.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                cb.emit(ExplorerAction::Search((*term).clone()));
            }
        })
    };
    let theme_btn = {
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(ExplorerAction::ToggleTheme))
    };
    let nav = |view: View| {
        let cb = props.on_action.clone();
        let active = props.view == view;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(ExplorerAction::ChangeView(view));
        });
        let style = format!(
            "padding:6px 12px; border-radius:6px; cursor:pointer; text-decoration:none; color:{}; {}",
            pal.text,
            if active { format!("background:{}; color:#fff;", pal.accent) } else { String::new() }
        );
        html! { <a href="#" {onclick} {style}>{ view.label() }</a> }
    };

    html! {<div id="top-bar" style={format!("display:flex; align-items:center; gap:12px; padding:8px 16px; background:{}; border-bottom:1px solid {};", pal.panel, pal.border)}>
        <h1 style={format!("margin:0; font-size:18px; color:{};", pal.accent)}>{"Places Explorer"}</h1>
        <nav class="main-nav" style="display:flex; gap:6px;">
            { nav(View::Map) }
            { nav(View::Saved) }
        </nav>
        <div style="flex:1; display:flex; gap:6px; justify-content:center;">
            <input type="text" placeholder="Search places..." value={(*term).clone()}
                oninput={on_input} onkeypress={on_keypress}
                style={format!("width:260px; padding:6px 10px; border-radius:6px; border:1px solid {}; background:{}; color:{};", pal.border, pal.background, pal.text)} />
            <button onclick={search_btn}>{"Search"}</button>
        </div>
        <button onclick={theme_btn} title="Toggle theme">{ if props.dark { "☀️" } else { "🌙" } }</button>
    </div>}
}
