//! Token checks shared by server functions, and the browser-side check that
//! drops a stored token the server no longer accepts.

use leptos::prelude::*;
use parley_types::{Credentials, VerifyResponse};

/// Accept `token` only if it is the one `credentials` issues.
pub fn check_token(credentials: Option<&Credentials>, token: &str) -> Result<(), ServerFnError> {
    let credentials = credentials.ok_or_else(|| ServerFnError::new("auth context unavailable"))?;
    if credentials.verify(token) {
        Ok(())
    } else {
        Err(ServerFnError::new("invalid token"))
    }
}

/// [`check_token`] against the credentials in the current request context.
pub fn require_token(token: &str) -> Result<(), ServerFnError> {
    let credentials = use_context::<Credentials>();
    check_token(credentials.as_ref(), token).inspect_err(|_| {
        log::warn!("rejected server call with an invalid token");
    })
}

#[server]
pub async fn verify_token(token: String) -> Result<VerifyResponse, ServerFnError> {
    let credentials = use_context::<Credentials>()
        .ok_or_else(|| ServerFnError::new("auth context unavailable"))?;
    Ok(VerifyResponse {
        valid: credentials.verify(&token),
    })
}

/// Once per page load, asks the server whether the stored token is still
/// valid and signs out if it is not. Place once inside `<Router>`.
#[component]
pub fn SessionCheck() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    verify_stored_token();
}

#[cfg(feature = "hydrate")]
fn verify_stored_token() {
    use leptos_router::{hooks::use_navigate, NavigateOptions};
    use parley_types::NotificationKind;
    use wasm_bindgen_futures::spawn_local;

    use crate::components::toast::{use_notification, ToastContext};
    use crate::routes::LOGIN_PATH;
    use crate::session::Session;

    let session = expect_context::<Session>();
    let toasts = expect_context::<ToastContext>();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let Some(token) = session.token() else {
            return;
        };
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match verify_token(token).await {
                Ok(VerifyResponse { valid: true }) => {}
                Ok(VerifyResponse { valid: false }) => {
                    if let Err(e) = session.sign_out() {
                        log::warn!("failed to clear session token: {e}");
                    }
                    use_notification(
                        &toasts,
                        "Session expired",
                        "Please sign in again",
                        NotificationKind::Warning,
                        None,
                    );
                    navigate(
                        LOGIN_PATH,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(e) => log::warn!("token verification failed: {e}"),
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".into(),
            password: "secret".into(),
            token: "tok".into(),
        }
    }

    #[test]
    fn issued_token_is_accepted() {
        assert!(check_token(Some(&credentials()), "tok").is_ok());
    }

    #[test]
    fn wrong_or_missing_token_is_rejected() {
        let creds = credentials();
        let err = check_token(Some(&creds), "other").unwrap_err();
        assert!(err.to_string().contains("invalid token"));
        assert!(check_token(Some(&creds), "").is_err());
    }

    #[test]
    fn missing_context_is_rejected() {
        let err = check_token(None, "tok").unwrap_err();
        assert!(err.to_string().contains("auth context unavailable"));
    }
}
