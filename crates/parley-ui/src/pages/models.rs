use leptos::prelude::*;
use parley_types::ModelEntry;

use crate::routes::{RouteDef, RouteName};

pub fn routes() -> Vec<RouteDef> {
    vec![RouteDef::new("/models", RouteName::Models)]
}

#[server]
async fn list_models(token: String) -> Result<Vec<ModelEntry>, ServerFnError> {
    use parley_types::ModelCatalog;

    crate::auth::require_token(&token)?;

    let catalog = use_context::<ModelCatalog>()
        .ok_or_else(|| ServerFnError::new("model catalog unavailable"))?;
    Ok(catalog.0)
}

fn model_count_label(count: usize) -> String {
    format!("{count} Model{}", if count == 1 { "" } else { "s" })
}

#[component]
pub fn ModelsPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (models, setModels) = signal(Option::<Result<Vec<ModelEntry>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use crate::components::toast::{use_notification, ToastContext};
        use crate::session::Session;
        use parley_types::NotificationKind;
        use wasm_bindgen_futures::spawn_local;

        let toasts = expect_context::<ToastContext>();
        let token = expect_context::<Session>().token().unwrap_or_default();
        spawn_local(async move {
            let result = list_models(token).await.map_err(|e| e.to_string());
            if let Err(e) = &result {
                use_notification(
                    &toasts,
                    "Models unavailable",
                    e,
                    NotificationKind::Error,
                    None,
                );
            }
            setModels.set(Some(result));
        });
    }

    view! {
        <div class="page-header">
            <h1>"Models"</h1>
            <p class="subtitle">"Models available for conversations"</p>
        </div>
        {move || {
            match models.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading models..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="error-text">"Failed to load models: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! {
                        <div class="card">
                            <div class="card-title">"No Models Configured"</div>
                            <p class="subtitle">"Add entries under [[models]] in the server config."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <div class="card">
                            <div class="card-title">{model_count_label(list.len())}</div>
                            <table>
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Description"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <tr>
                                                    <td>{entry.name}</td>
                                                    <td>{entry.description}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(model_count_label(0), "0 Models");
        assert_eq!(model_count_label(1), "1 Model");
        assert_eq!(model_count_label(3), "3 Models");
    }

    #[test]
    fn exports_models_route() {
        assert_eq!(routes(), vec![RouteDef::new("/models", RouteName::Models)]);
    }
}
