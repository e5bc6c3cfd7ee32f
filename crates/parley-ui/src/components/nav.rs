use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use parley_types::NotificationKind;

use crate::components::toast::{use_notification, ToastContext};
use crate::routes::{resolve, RouteName, LOGIN_PATH};
use crate::session::Session;

struct NavLink {
    href: &'static str,
    icon: &'static str,
    label: &'static str,
    routes: &'static [RouteName],
}

const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "/",
        icon: "\u{25A3}",
        label: "Home",
        routes: &[RouteName::Home],
    },
    NavLink {
        href: "/chat",
        icon: "\u{2709}",
        label: "Chat",
        routes: &[RouteName::Chat, RouteName::Conversation],
    },
    NavLink {
        href: "/models",
        icon: "\u{2B21}",
        label: "Models",
        routes: &[RouteName::Models],
    },
];

#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();
    let session = expect_context::<Session>();
    let toasts = expect_context::<ToastContext>();
    let navigate = use_navigate();

    let currentRoute = Memo::new(move |_| resolve(&location.pathname.get()).name);

    let logout = move |_| {
        if let Err(e) = session.sign_out() {
            log::warn!("failed to clear session token: {e}");
        }
        use_notification(
            &toasts,
            "Signed out",
            "Your session has ended",
            NotificationKind::Info,
            None,
        );
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"P"</div>
                <span class="brand-text">"Parley"</span>
            </div>
            <ul class="nav-links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let routes = link.routes;
                        view! {
                            <li
                                class="nav-item"
                                class:active=move || routes.contains(&currentRoute.get())
                            >
                                <a href=link.href>
                                    <span class="nav-icon">{link.icon}</span>
                                    <span>{link.label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="btn btn-ghost nav-logout" on:click=logout>
                "Sign out"
            </button>
        </nav>
    }
}
