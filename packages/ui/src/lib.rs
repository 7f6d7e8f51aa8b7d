//! This crate contains all shared UI for the workspace.

mod theme;
pub use theme::{set_theme, use_theme, Palette, Theme, ThemeProvider, ThemeToggle};

mod credentials;
pub use credentials::{default_credentials, use_catalog, use_credentials, Credentials};

mod gaming;
pub use gaming::{Branch, GamingPage, GamingView};
