use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>"Welcome to Parley"</h1>
            <p class="subtitle">"Chat with the models running on your server"</p>
        </div>
        <div class="home-grid">
            <a class="card home-card" href="/chat">
                <div class="card-title">"Chat"</div>
                <p>"Start or continue a conversation"</p>
            </a>
            <a class="card home-card" href="/models">
                <div class="card-title">"Models"</div>
                <p>"See which models are available"</p>
            </a>
        </div>
    }
}
