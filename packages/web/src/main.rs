use dioxus::prelude::*;

use views::{Gaming, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/gaming")]
    Gaming {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let cfg = api::CatalogConfig::from_env();
    eprintln!("startup: CATALOG_API_URL={}", cfg.base_url);
    eprintln!("startup: token cookie={}", cfg.token_cookie);
}

#[component]
fn App() -> Element {
    use_context_provider(|| api::CatalogClient::new(api::CatalogConfig::from_env()));
    use_context_provider(ui::default_credentials);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ThemeProvider {
            Router::<Route> {}
        }
    }
}

/// Header and sidebar around the routed page.
#[component]
fn WebShell() -> Element {
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
