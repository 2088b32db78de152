use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn color(self) -> &'static str {
        match self {
            NotificationKind::Success => "#4caf50",
            NotificationKind::Error => "#f44336",
            NotificationKind::Info => "#2196f3",
        }
    }

    pub fn class_suffix(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Notification {
    pub id: usize,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Notification,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let exiting = use_state(|| false);

    // Auto-dismiss timer. Restarted whenever a new notification replaces the
    // one on screen; dropped (cancelled) on unmount so a manual close never
    // races a stale timer.
    {
        let exiting = exiting.clone();
        use_effect_with_deps(
            move |_| {
                exiting.set(false);
                let exiting = exiting.clone();
                let dismiss = Timeout::new(config::NOTIFICATION_DISMISS_MS, move || {
                    exiting.set(true);
                });
                move || drop(dismiss)
            },
            props.notification.id,
        );
    }

    // Exit animation runs before the toast is actually removed.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |exiting| {
                let removal = exiting.then(|| {
                    Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
                        on_dismiss.emit(());
                    })
                });
                move || drop(removal)
            },
            *exiting,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let animation = if *exiting {
        "slideOutRight"
    } else {
        "slideInRight"
    };
    let style = format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 15px 20px; border-radius: 5px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); \
         z-index: 9999; max-width: 400px; animation: {} 0.3s ease;",
        props.notification.kind.color(),
        animation
    );

    html! {
        <div
            class={classes!("notification", format!("notification-{}", props.notification.kind.class_suffix()))}
            style={style}
        >
            <style>
                {r#"
                    @keyframes slideInRight {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideOutRight {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(100%); opacity: 0; }
                    }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 20px;
                        cursor: pointer;
                        line-height: 1;
                    }
                "#}
            </style>
            <div class="notification-content">
                <span class="notification-message">{ props.notification.message.clone() }</span>
                <button class="notification-close" onclick={close}>{"\u{00d7}"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "notification_test.rs"]
mod tests;
