use crate::viewmodels::{Notification, NotificationKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Option<Notification>,
    pub on_close: Callback<()>,
}

/// Aviso flotante (éxito / error)
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };

    let (class, icon) = match notification.kind {
        NotificationKind::Success => ("toast toast-success", "✅"),
        NotificationKind::Error => ("toast toast-error", "❌"),
    };

    html! {
        <div class={class} role="alert">
            <span class="toast-icon">{ icon }</span>
            <div class="toast-body">
                <strong class="toast-title">{ notification.title.clone() }</strong>
                <p class="toast-message">{ notification.message.clone() }</p>
            </div>
            <button
                type="button"
                class="toast-close"
                onclick={props.on_close.reform(|_| ())}
            >
                {"✕"}
            </button>
        </div>
    }
}
