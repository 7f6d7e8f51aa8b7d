use dioxus::prelude::*;

use views::{Gaming, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/gaming")]
    Gaming {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    init_tracing();
    log_runtime_config();
    dioxus::launch(App);
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let cfg = api::CatalogConfig::from_env();
    tracing::info!("startup: CATALOG_API_URL={}", cfg.base_url);

    let token_var = api::EnvToken::default();
    if std::env::var(token_var.var()).is_err() {
        tracing::warn!(
            "startup: {} is not set; catalog requests will be sent without a token",
            token_var.var()
        );
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| api::CatalogClient::new(api::CatalogConfig::from_env()));
    use_context_provider(|| ui::Credentials::new(api::EnvToken::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ThemeProvider {
            Router::<Route> {}
        }
    }
}

/// Desktop header and sidebar around the routed page.
#[component]
fn DesktopShell() -> Element {
    let dark = ui::use_theme()().is_dark;

    rsx! {
        div { class: if dark { "shell dark" } else { "shell light" },
            header { class: "shell_header",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand_mark" }
                    span { class: "brand_name", "Nxt Watch" }
                }
                ui::ThemeToggle {}
            }
            div { class: "shell_body",
                nav { class: "sidebar",
                    Link { class: "nav_link", active_class: "active", to: Route::Gaming {}, "🎮 Gaming" }
                }
                main { class: "route_view", Outlet::<Route> {} }
            }
        }
    }
}
