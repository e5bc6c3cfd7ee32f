#![allow(non_snake_case)]

#[cfg_attr(not(feature = "ssr"), allow(dead_code))]
mod config;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use parley_types::ModelCatalog;
    use parley_ui::{shell, App};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = config::path_from_args(&args);
    let appConfig = config::load(std::path::Path::new(&configPath));
    tracing::info!(
        "loaded config from {configPath}: bind={}, {} model(s)",
        appConfig.site_addr(),
        appConfig.models.len()
    );

    let credentials = appConfig.credentials();
    let catalog = ModelCatalog(appConfig.models.clone());

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let mut leptosOptions = conf.leptos_options;
    if let Ok(addr) = appConfig.site_addr().parse() {
        leptosOptions.site_addr = addr;
    } else {
        tracing::warn!(
            "invalid bind address {}, keeping {}",
            appConfig.site_addr(),
            leptosOptions.site_addr
        );
    }
    let addr = leptosOptions.site_addr;

    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            move || {
                provide_context(credentials.clone());
                provide_context(catalog.clone());
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
