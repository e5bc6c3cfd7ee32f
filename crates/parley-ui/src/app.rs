use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::auth::SessionCheck;
use crate::components::loading::LoadingProvider;
use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::chat::{ChatPage, ConversationPage, Conversations};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::models::ModelsPage;
use crate::pages::not_found::NotFoundPage;
use crate::routes::NavigationGuard;
use crate::session::Session;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Route views mirror `routes::route_table()`. Each view sits behind a
/// `NavigationGuard`, so nothing is built for a location the guard rejects.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::browser());
    provide_context(Conversations::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/parley-console.css" />
        <Title text="Parley" />
        <ToastProvider>
            <LoadingProvider>
                <Router>
                    <SessionCheck />
                    <Routes fallback=|| view! { <Layout><NotFoundPage /></Layout> }.into_any()>
                        <Route path=StaticSegment("") view=HomeView />
                        <Route path=StaticSegment("login") view=LoginView />
                        <Route path=StaticSegment("chat") view=ChatView />
                        <Route
                            path=(StaticSegment("chat"), ParamSegment("id"))
                            view=ConversationView
                        />
                        <Route path=StaticSegment("models") view=ModelsView />
                    </Routes>
                </Router>
            </LoadingProvider>
        </ToastProvider>
    }
}

#[component]
fn Layout(children: ChildrenFn) -> impl IntoView {
    view! {
        <NavigationGuard>
            <div class="app-layout">
                <Nav />
                <main class="main-content">{children()}</main>
            </div>
        </NavigationGuard>
    }
}

#[component]
fn LoginView() -> impl IntoView {
    view! {
        <NavigationGuard>
            <LoginPage />
        </NavigationGuard>
    }
}

#[component]
fn HomeView() -> impl IntoView {
    view! {
        <Layout>
            <HomePage />
        </Layout>
    }
}

#[component]
fn ChatView() -> impl IntoView {
    view! {
        <Layout>
            <ChatPage />
        </Layout>
    }
}

#[component]
fn ConversationView() -> impl IntoView {
    view! {
        <Layout>
            <ConversationPage />
        </Layout>
    }
}

#[component]
fn ModelsView() -> impl IntoView {
    view! {
        <Layout>
            <ModelsPage />
        </Layout>
    }
}
