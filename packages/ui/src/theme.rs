use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const THEME_STORAGE_KEY: &str = "gaming_feed_theme";

pub const FAILURE_IMG_DARK: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-watch-failure-view-dark-theme-img.png";
pub const FAILURE_IMG_LIGHT: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-watch-failure-view-light-theme-img.png";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub is_dark: bool,
}

/// Colours and assets that differ between light and dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub loader_color: &'static str,
    pub failure_image: &'static str,
    pub modifier: &'static str,
}

impl Palette {
    pub fn for_theme(dark: bool) -> Self {
        if dark {
            Palette {
                loader_color: "#ffffff",
                failure_image: FAILURE_IMG_DARK,
                modifier: "dark",
            }
        } else {
            Palette {
                loader_color: "#181818",
                failure_image: FAILURE_IMG_LIGHT,
                modifier: "light",
            }
        }
    }

    /// `base` plus the theme modifier, e.g. `"banner dark"`.
    pub fn class(&self, base: &str) -> String {
        format!("{base} {}", self.modifier)
    }
}

/// Provide `Signal<Theme>` to the tree, restoring the saved choice after mount.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let mut theme = use_signal(Theme::default);
    use_context_provider(|| theme);

    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"(function(){{
                    try {{ return localStorage.getItem("{THEME_STORAGE_KEY}") || ""; }}
                    catch(e) {{ return ""; }}
                }})()"#
            );
            if let Ok(v) = document::eval(&js).await {
                if v.as_str() == Some("dark") {
                    theme.set(Theme { is_dark: true });
                }
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        {children}
    }
}

pub fn use_theme() -> Signal<Theme> {
    if let Some(sig) = try_use_context::<Signal<Theme>>() {
        return sig;
    }

    eprintln!("startup: missing ThemeProvider context, using local light theme");
    use_signal(Theme::default)
}

pub fn set_theme(mut sig: Signal<Theme>, next: Theme) {
    sig.set(next);
    let value = if next.is_dark { "dark" } else { "light" };
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("{THEME_STORAGE_KEY}","{value}"); }} catch(e) {{}} return ""; }})()"#
        ))
        .await;
    });
}

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let dark = theme().is_dark;

    rsx! {
        button {
            class: "theme_toggle",
            "data-testid": "theme",
            "aria-label": if dark { "Switch to light theme" } else { "Switch to dark theme" },
            onclick: move |_| set_theme(theme, Theme { is_dark: !dark }),
            if dark { "☀" } else { "☾" }
        }
    }
}
