use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>"Page not found"</h1>
            <p class="subtitle">"Nothing lives at this address."</p>
        </div>
        <a class="btn btn-primary" href="/">"Back home"</a>
    }
}
