use leptos::prelude::*;

pub const DEFAULT_LOADING_TEXT: &str = "Loading";
pub const LOADING_BACKGROUND: &str = "rgba(0, 0, 0, 0.7)";

#[derive(Clone, Debug, PartialEq)]
pub struct LoadingOptions {
    pub lock: bool,
    pub text: String,
    pub background: String,
}

/// Something that can put a loading overlay on screen.
pub trait LoadingService {
    type Handle;

    fn service(&self, options: LoadingOptions) -> Self::Handle;
}

/// Show a loading overlay with `text` (default "Loading") and the fixed
/// translucent background. `lock` defaults to true.
pub fn use_loading<S>(service: &S, text: Option<&str>, lock: Option<bool>) -> S::Handle
where
    S: LoadingService + ?Sized,
{
    service.service(LoadingOptions {
        lock: lock.unwrap_or(true),
        text: text.unwrap_or(DEFAULT_LOADING_TEXT).to_string(),
        background: LOADING_BACKGROUND.to_string(),
    })
}

#[derive(Clone, Debug)]
struct Overlay {
    id: u64,
    options: LoadingOptions,
}

/// Leptos loading service. Overlays stack; the most recent one is shown.
#[derive(Clone, Copy)]
pub struct LoadingContext {
    overlays: RwSignal<Vec<Overlay>>,
    next_id: StoredValue<u64>,
}

/// Dismisses its overlay. Closing twice is harmless.
#[derive(Clone, Copy, Debug)]
pub struct LoadingHandle {
    id: u64,
    overlays: RwSignal<Vec<Overlay>>,
}

impl LoadingContext {
    pub fn new() -> Self {
        Self {
            overlays: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Options of the overlay on top of the stack, if any.
    pub fn current(&self) -> Option<LoadingOptions> {
        self.overlays.with(|list| list.last().map(|o| o.options.clone()))
    }

    pub fn open_count(&self) -> usize {
        self.overlays.with(|list| list.len())
    }
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingHandle {
    pub fn close(&self) {
        let id = self.id;
        self.overlays.update(|overlays| overlays.retain(|o| o.id != id));
    }
}

impl LoadingService for LoadingContext {
    type Handle = LoadingHandle;

    fn service(&self, options: LoadingOptions) -> LoadingHandle {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.overlays.update(|overlays| overlays.push(Overlay { id, options }));

        LoadingHandle {
            id,
            overlays: self.overlays,
        }
    }
}

/// Provides [`LoadingContext`] and renders the active overlay.
#[component]
pub fn LoadingProvider(children: Children) -> impl IntoView {
    let ctx = LoadingContext::new();
    provide_context(ctx);

    view! {
        {children()}
        {move || {
            ctx.current()
                .map(|options| {
                    let class = if options.lock {
                        "loading-overlay loading-locked"
                    } else {
                        "loading-overlay"
                    };
                    view! {
                        <div class=class style=format!("background: {}", options.background)>
                            <div class="spinner"></div>
                            <span class="loading-text">{options.text}</span>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingLoading {
        calls: RefCell<Vec<LoadingOptions>>,
    }

    impl LoadingService for RecordingLoading {
        type Handle = usize;

        fn service(&self, options: LoadingOptions) -> usize {
            let mut calls = self.calls.borrow_mut();
            calls.push(options);
            calls.len()
        }
    }

    #[test]
    fn passes_text_and_lock_with_fixed_background() {
        let service = RecordingLoading::default();
        let handle = use_loading(&service, Some("Signing in"), Some(false));

        assert_eq!(handle, 1);
        assert_eq!(
            service.calls.borrow()[0],
            LoadingOptions {
                lock: false,
                text: "Signing in".into(),
                background: "rgba(0, 0, 0, 0.7)".into(),
            }
        );
    }

    #[test]
    fn defaults_to_locked_loading_text() {
        let service = RecordingLoading::default();
        use_loading(&service, None, None);

        let calls = service.calls.borrow();
        assert!(calls[0].lock);
        assert_eq!(calls[0].text, "Loading");
        assert_eq!(calls[0].background, LOADING_BACKGROUND);
    }

    #[test]
    fn newest_overlay_is_shown_and_closing_uncovers_the_previous() {
        let ctx = LoadingContext::new();
        assert_eq!(ctx.current(), None);

        let first = use_loading(&ctx, Some("a"), None);
        let second = use_loading(&ctx, Some("b"), Some(false));
        assert_eq!(ctx.open_count(), 2);

        let top = ctx.current().unwrap();
        assert_eq!(top.text, "b");
        assert!(!top.lock);

        second.close();
        assert_eq!(ctx.current().unwrap().text, "a");

        first.close();
        assert_eq!(ctx.current(), None);
    }

    #[test]
    fn closing_twice_leaves_other_overlays_alone() {
        let ctx = LoadingContext::new();
        let first = use_loading(&ctx, Some("a"), None);
        let second = use_loading(&ctx, Some("b"), None);

        second.close();
        second.close();
        assert_eq!(ctx.open_count(), 1);
        assert_eq!(ctx.current().unwrap().text, "a");

        first.close();
        assert_eq!(ctx.open_count(), 0);
    }

    #[test]
    fn handles_close_their_own_overlay_out_of_order() {
        let ctx = LoadingContext::new();
        let first = use_loading(&ctx, Some("a"), None);
        let _second = use_loading(&ctx, Some("b"), None);

        first.close();
        assert_eq!(ctx.open_count(), 1);
        assert_eq!(ctx.current().unwrap().text, "b");
    }

    #[test]
    fn empty_text_is_passed_through() {
        let service = RecordingLoading::default();
        use_loading(&service, Some(""), Some(true));
        assert_eq!(service.calls.borrow()[0].text, "");
    }
}
