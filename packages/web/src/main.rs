use dioxus::prelude::*;

use ui::{Navigation, SessionProvider};
use views::{Dashboard, Home, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
}

impl From<Navigation> for Route {
    fn from(target: Navigation) -> Self {
        match target {
            Navigation::Home => Route::Home {},
            Navigation::Dashboard => Route::Dashboard {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use std::sync::Arc;

    use api::server::{build_router, AppState, ServerConfig};
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState::in_memory());

    // API first, then the Dioxus application
    let router = axum::Router::new()
        .nest("/api", build_router(state))
        .serve_dioxus_application(ServeConfig::new(), App);

    // Use BIND_ADDR, else the address from dx serve, else localhost:8080
    let addr = config
        .bind_addr
        .unwrap_or_else(dioxus::cli_config::fullstack_address_or_localhost);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
