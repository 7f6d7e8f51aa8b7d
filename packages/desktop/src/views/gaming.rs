use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! { ui::GamingPage {} }
}

#[component]
pub fn Gaming() -> Element {
    rsx! { ui::GamingPage {} }
}
