use yew::prelude::*;

use crate::state::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationProps {
    pub notice: Option<Notice>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    html! {<div id="notification" style="position:fixed; bottom:24px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.92); color:#fff; border:1px solid #30363d; border-radius:8px; padding:10px 18px; font-size:14px; z-index:100; box-shadow:0 6px 18px rgba(0,0,0,0.4);">
        <span id="notification-message">{ notice.message.clone() }</span>
    </div>}
}
