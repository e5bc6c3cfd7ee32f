use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use parley_types::{LoginResponse, NotificationKind};

use crate::components::loading::{use_loading, LoadingContext, LoadingHandle};
use crate::components::toast::{use_notification, ToastContext};
use crate::routes::HOME_PATH;
use crate::session::Session;

#[server]
async fn login(username: String, password: String) -> Result<LoginResponse, ServerFnError> {
    use parley_types::{Credentials, LoginRequest};

    let credentials = use_context::<Credentials>()
        .ok_or_else(|| ServerFnError::new("auth context unavailable"))?;

    let (username, password) = login_fields(&username, &password).map_err(ServerFnError::new)?;
    let request = LoginRequest { username, password };

    if !credentials.matches(&request) {
        log::warn!("login failed for user {}", request.username);
        return Err(ServerFnError::new("invalid credentials"));
    }

    log::info!("login successful for user {}", request.username);
    Ok(LoginResponse::new(credentials.token.clone(), &request.username))
}

/// Trimmed username and password, or the reason the form cannot be sent.
fn login_fields(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required");
    }
    if password.trim().is_empty() {
        return Err("Password is required");
    }
    Ok((username.to_string(), password.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<ToastContext>();
    let loading = expect_context::<LoadingContext>();
    let navigate = use_navigate();

    let loginAction = ServerAction::<Login>::new();
    let loginValue = loginAction.value();
    let pending = loginAction.pending();
    let overlay = StoredValue::new(Option::<LoadingHandle>::None);
    let (username, setUsername) = signal(String::new());
    let (password, setPassword) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match login_fields(&username.get_untracked(), &password.get_untracked()) {
            Ok((username, password)) => {
                loginAction.dispatch(Login { username, password });
            }
            Err(reason) => {
                use_notification(
                    &toasts,
                    "Login failed",
                    reason,
                    NotificationKind::Warning,
                    None,
                );
            }
        }
    };

    Effect::new(move |_| {
        if pending.get() {
            let handle = use_loading(&loading, Some("Signing in"), None);
            overlay.set_value(Some(handle));
        } else if let Some(handle) = overlay.get_value() {
            handle.close();
            overlay.set_value(None);
        }
    });

    Effect::new(move |_| match loginValue.get() {
        Some(Ok(response)) => {
            if let Err(e) = session.sign_in(&response.token) {
                use_notification(
                    &toasts,
                    "Login failed",
                    &e.to_string(),
                    NotificationKind::Error,
                    None,
                );
                return;
            }
            use_notification(
                &toasts,
                "Welcome",
                &format!("Signed in as {}", response.user),
                NotificationKind::Success,
                None,
            );
            navigate(HOME_PATH, Default::default());
        }
        Some(Err(e)) => {
            use_notification(
                &toasts,
                "Login failed",
                &e.to_string(),
                NotificationKind::Error,
                None,
            );
        }
        None => {}
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"P"</div>
                    <h1>"Parley"</h1>
                    <p>"Sign in to chat with your models"</p>
                </div>

                <form on:submit=submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Enter your username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| setUsername.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
