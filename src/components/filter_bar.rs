use yew::prelude::*;

use super::theme::palette;
use crate::model::Category;
use crate::state::ExplorerAction;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterBarProps {
    pub dark: bool,
    pub on_action: Callback<ExplorerAction>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let active = use_state(|| None::<Category>);
    let pal = palette(props.dark);

    let button = |category: Category, label: &'static str| {
        let cb = props.on_action.clone();
        let active_handle = active.clone();
        let onclick = Callback::from(move |_| {
            active_handle.set(Some(category));
            cb.emit(ExplorerAction::Filter(category));
        });
        let is_active = *active == Some(category);
        let style = format!(
            "padding:4px 10px; border-radius:14px; border:2px solid {}; background:{}; color:{}; cursor:pointer;",
            category.color(),
            if is_active { category.color() } else { pal.panel },
            if is_active { "#fff" } else { pal.text },
        );
        html! { <button class="filter-btn" {onclick} {style}>{ label }</button> }
    };

    html! {<div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; gap:8px; z-index:5;">
        { button(Category::Restaurant, "🍽 Restaurants") }
        { button(Category::Hotel, "🏨 Hotels") }
        { button(Category::Attraction, "🎡 Attractions") }
    </div>}
}
