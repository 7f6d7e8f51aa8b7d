use std::rc::Rc;

use api::CredentialProvider;
use dioxus::prelude::*;

/// Shared handle to the token source, provided at the app root.
#[derive(Clone)]
pub struct Credentials(Rc<dyn CredentialProvider>);

impl Credentials {
    pub fn new(provider: impl CredentialProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn provider(&self) -> &dyn CredentialProvider {
        self.0.as_ref()
    }
}

/// Reads the catalog token from `document.cookie` on every call.
#[cfg(target_arch = "wasm32")]
pub struct BrowserCookies {
    name: String,
}

#[cfg(target_arch = "wasm32")]
impl BrowserCookies {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialProvider for BrowserCookies {
    fn get_token(&self) -> Option<String> {
        use web_sys::wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = html.cookie().ok()?;
        api::cookie_value(&cookies, &self.name)
    }
}

/// Cookie jar in the browser, `JWT_TOKEN` everywhere else.
pub fn default_credentials() -> Credentials {
    #[cfg(target_arch = "wasm32")]
    {
        Credentials::new(BrowserCookies::new(api::CatalogConfig::from_env().token_cookie))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Credentials::new(api::EnvToken::default())
    }
}

pub fn use_credentials() -> Credentials {
    use_hook(|| try_consume_context::<Credentials>().unwrap_or_else(default_credentials))
}

pub fn use_catalog() -> api::CatalogClient {
    use_hook(|| {
        try_consume_context::<api::CatalogClient>()
            .unwrap_or_else(|| api::CatalogClient::new(api::CatalogConfig::from_env()))
    })
}
