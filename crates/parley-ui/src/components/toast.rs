use std::time::Duration;

use leptos::prelude::*;
use parley_types::NotificationKind;

pub const DEFAULT_DURATION_MS: u64 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub title: String,
    pub kind: NotificationKind,
    /// Zero keeps the notification until it is closed.
    pub duration: Duration,
}

/// Something that can display a transient notification.
pub trait NotificationService {
    type Output;

    fn notify(&self, notification: Notification) -> Self::Output;
}

/// Show a notification. `duration_ms` defaults to 3000.
pub fn use_notification<S>(
    service: &S,
    title: &str,
    message: &str,
    kind: NotificationKind,
    duration_ms: Option<u64>,
) -> S::Output
where
    S: NotificationService + ?Sized,
{
    service.notify(Notification {
        message: message.to_string(),
        title: title.to_string(),
        kind,
        duration: Duration::from_millis(duration_ms.unwrap_or(DEFAULT_DURATION_MS)),
    })
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: ReadSignal<u64>,
    set_next_id: WriteSignal<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (toasts, setToasts) = signal(Vec::<Toast>::new());
        let (nextId, setNextId) = signal(0u64);

        Self {
            toasts,
            set_toasts: setToasts,
            next_id: nextId,
            set_next_id: setNextId,
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn push(&self, notification: Notification) -> u64 {
        let currentId = self.next_id.get_untracked();
        self.set_next_id.set(currentId + 1);

        let toast = Toast {
            id: currentId,
            title: notification.title,
            message: notification.message,
            kind: notification.kind,
        };

        self.set_toasts.update(|toasts| {
            toasts.push(toast);
        });

        if !notification.duration.is_zero() {
            let ctx = *self;
            set_timeout(move || ctx.dismiss(currentId), notification.duration);
        }

        currentId
    }

    pub fn dismiss(&self, id: u64) {
        self.set_toasts.update(|toasts| {
            toasts.retain(|t| t.id != id);
        });
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService for ToastContext {
    type Output = u64;

    fn notify(&self, notification: Notification) -> u64 {
        self.push(notification)
    }
}

/// Provides toast context and renders the toast container.
/// Place this once near the root of your app.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let ctx = ToastContext::new();
    provide_context(ctx);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || ctx.toasts()
                key=|toast| toast.id
                let:toast
            >
                <div class=format!("toast toast-{}", toast.kind.as_str())>
                    <div class="toast-header">
                        <strong class="toast-title">{toast.title.clone()}</strong>
                        <button
                            class="toast-close"
                            on:click=move |_| ctx.dismiss(toast.id)
                        >
                            "\u{00D7}"
                        </button>
                    </div>
                    <div class="toast-message">{toast.message.clone()}</div>
                </div>
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        calls: RefCell<Vec<Notification>>,
    }

    impl NotificationService for RecordingNotifier {
        type Output = ();

        fn notify(&self, notification: Notification) {
            self.calls.borrow_mut().push(notification);
        }
    }

    #[test]
    fn passes_every_field_through() {
        let notifier = RecordingNotifier::default();
        use_notification(
            &notifier,
            "Saved",
            "Conversation stored",
            NotificationKind::Success,
            Some(1500),
        );

        assert_eq!(
            notifier.calls.borrow()[0],
            Notification {
                message: "Conversation stored".into(),
                title: "Saved".into(),
                kind: NotificationKind::Success,
                duration: Duration::from_millis(1500),
            }
        );
    }

    #[test]
    fn duration_defaults_to_three_seconds() {
        let notifier = RecordingNotifier::default();
        use_notification(&notifier, "Oops", "Failed", NotificationKind::Error, None);
        assert_eq!(
            notifier.calls.borrow()[0].duration,
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn toast_context_assigns_ids_and_dismisses_the_right_toast() {
        let ctx = ToastContext::new();
        let first = use_notification(&ctx, "One", "first", NotificationKind::Info, Some(0));
        let second = use_notification(&ctx, "Two", "second", NotificationKind::Error, Some(0));
        assert_eq!((first, second), (0, 1));

        let shown: Vec<(u64, String)> =
            ctx.toasts().into_iter().map(|t| (t.id, t.title)).collect();
        assert_eq!(shown, vec![(0, "One".to_string()), (1, "Two".to_string())]);

        ctx.dismiss(first);
        let remaining = ctx.toasts();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
        assert_eq!(remaining[0].message, "second");
        assert_eq!(remaining[0].kind, NotificationKind::Error);

        ctx.dismiss(first);
        assert_eq!(ctx.toasts().len(), 1);
    }

    #[test]
    fn zero_duration_toast_stays_until_dismissed() {
        let ctx = ToastContext::new();
        let id = use_notification(&ctx, "Sticky", "stays", NotificationKind::Warning, Some(0));
        assert_eq!(ctx.toasts().len(), 1);

        ctx.dismiss(id);
        assert!(ctx.toasts().is_empty());
    }

    #[test]
    fn zero_duration_is_kept_as_sticky() {
        let notifier = RecordingNotifier::default();
        use_notification(&notifier, "t", "m", NotificationKind::Warning, Some(0));
        assert!(notifier.calls.borrow()[0].duration.is_zero());
    }
}
