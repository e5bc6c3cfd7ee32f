use leptos::prelude::*;
use leptos_router::{components::Redirect, hooks::use_location, NavigateOptions};

use super::{HOME_PATH, LOGIN_PATH};
use crate::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed(String),
    Redirect(String),
}

/// Decide whether a navigation to `target` may proceed.
///
/// The token is read from `session` on every call.
pub fn guard(target: &str, session: &Session) -> Navigation {
    let isLogin = target == LOGIN_PATH;
    let isAuthenticated = session.is_authenticated();

    if !isLogin && !isAuthenticated {
        Navigation::Redirect(LOGIN_PATH.to_string())
    } else if isLogin && isAuthenticated {
        Navigation::Redirect(HOME_PATH.to_string())
    } else {
        Navigation::Proceed(target.to_string())
    }
}

/// What a guarded route shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Token not readable yet (server render, first hydrate pass).
    Pending,
    Render,
    Redirect(String),
}

pub fn guard_view(hydrated: bool, target: &str, session: &Session) -> GuardView {
    if !hydrated {
        return GuardView::Pending;
    }
    match guard(target, session) {
        Navigation::Proceed(_) => GuardView::Render,
        Navigation::Redirect(to) => GuardView::Redirect(to),
    }
}

/// Wraps a route view. The view is only built once [`guard`] lets the
/// current location proceed; otherwise the history entry is replaced with
/// the redirect target.
#[component]
pub fn NavigationGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();

    // Effects never run on the server, so this flips only in the browser.
    let hydrated = RwSignal::new(false);
    Effect::new(move |_| hydrated.set(true));

    move || {
        let target = location.pathname.get();
        match guard_view(hydrated.get(), &target, &session) {
            GuardView::Pending => view! {
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            }
            .into_any(),
            GuardView::Render => children().into_any(),
            GuardView::Redirect(to) => {
                log::debug!("guard: {target} -> {to}");
                view! {
                    <Redirect
                        path=to
                        options=NavigateOptions {
                            replace: true,
                            ..Default::default()
                        }
                    />
                }
                .into_any()
            }
        }
    }
}
