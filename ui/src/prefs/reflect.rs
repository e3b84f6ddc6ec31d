//! Pushing preference values into the document root.
//!
//! Language lands as `lang`/`dir` attributes, theme as the `dark` class plus
//! the two `--primary*` custom properties. Each platform drives its own DOM;
//! [`HeadlessDocument`] records what would have been applied so the services
//! stay testable without a renderer.

use thiserror::Error;

use super::{Language, Theme};

#[derive(Debug, Error)]
pub enum ReflectError {
    #[error("no document to reflect into")]
    NoDocument,
    #[error("document rejected the {0} update")]
    Apply(&'static str),
}

pub trait DocumentReflector {
    /// Sets `lang` and `dir` on the root element (`rtl` iff Arabic).
    fn apply_language(&self, language: Language) -> Result<(), ReflectError>;
    /// Toggles the root `dark` class and re-points the brand properties.
    fn apply_theme(&self, theme: Theme) -> Result<(), ReflectError>;
}

/// What a reflector last applied. Owned snapshot, comparable in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReflectedState {
    pub lang: Option<String>,
    pub dir: Option<String>,
    pub dark_class: bool,
    pub primary: Option<String>,
    pub primary_rgb: Option<String>,
}

/// Records applied state instead of touching a DOM. Used by unit tests and
/// any context without a document.
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    state: std::cell::RefCell<ReflectedState>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ReflectedState {
        self.state.borrow().clone()
    }
}

impl DocumentReflector for HeadlessDocument {
    fn apply_language(&self, language: Language) -> Result<(), ReflectError> {
        let mut state = self.state.borrow_mut();
        state.lang = Some(language.code().to_string());
        state.dir = Some(language.dir().to_string());
        Ok(())
    }

    fn apply_theme(&self, theme: Theme) -> Result<(), ReflectError> {
        let mut state = self.state.borrow_mut();
        state.dark_class = theme.is_dark();
        state.primary = Some(theme.primary_hex().to_string());
        state.primary_rgb = Some(theme.primary_rgb().to_string());
        Ok(())
    }
}

/// Live browser DOM via `web_sys`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserDocument;

#[cfg(target_arch = "wasm32")]
impl BrowserDocument {
    pub fn new() -> Self {
        Self
    }

    fn root() -> Result<web_sys::Element, ReflectError> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .ok_or(ReflectError::NoDocument)
    }
}

#[cfg(target_arch = "wasm32")]
impl DocumentReflector for BrowserDocument {
    fn apply_language(&self, language: Language) -> Result<(), ReflectError> {
        let root = Self::root()?;
        root.set_attribute("lang", language.code())
            .map_err(|_| ReflectError::Apply("lang attribute"))?;
        root.set_attribute("dir", language.dir())
            .map_err(|_| ReflectError::Apply("dir attribute"))?;
        Ok(())
    }

    fn apply_theme(&self, theme: Theme) -> Result<(), ReflectError> {
        use wasm_bindgen::JsCast;

        let root = Self::root()?;
        let classes = root.class_list();
        let class_result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        class_result.map_err(|_| ReflectError::Apply("dark class"))?;

        let style = root
            .dyn_ref::<web_sys::HtmlElement>()
            .ok_or(ReflectError::Apply("root style"))?
            .style();
        style
            .set_property("--primary", theme.primary_hex())
            .map_err(|_| ReflectError::Apply("--primary property"))?;
        style
            .set_property("--primary-rgb", theme.primary_rgb())
            .map_err(|_| ReflectError::Apply("--primary-rgb property"))?;
        Ok(())
    }
}

/// Desktop webview DOM, driven through the document eval bridge. Scripts are
/// fire-and-forget; the webview applies them on its next tick.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct WebviewDocument;

#[cfg(not(target_arch = "wasm32"))]
impl WebviewDocument {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DocumentReflector for WebviewDocument {
    fn apply_language(&self, language: Language) -> Result<(), ReflectError> {
        let script = format!(
            "document.documentElement.setAttribute('lang','{}');\
             document.documentElement.setAttribute('dir','{}');",
            language.code(),
            language.dir()
        );
        let _ = dioxus::document::eval(&script);
        Ok(())
    }

    fn apply_theme(&self, theme: Theme) -> Result<(), ReflectError> {
        let script = format!(
            "document.documentElement.classList.toggle('dark', {});\
             document.documentElement.style.setProperty('--primary','{}');\
             document.documentElement.style.setProperty('--primary-rgb','{}');",
            theme.is_dark(),
            theme.primary_hex(),
            theme.primary_rgb()
        );
        let _ = dioxus::document::eval(&script);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_records_language() {
        let doc = HeadlessDocument::new();
        doc.apply_language(Language::Ar).unwrap();

        let state = doc.snapshot();
        assert_eq!(state.lang.as_deref(), Some("ar"));
        assert_eq!(state.dir.as_deref(), Some("rtl"));

        doc.apply_language(Language::En).unwrap();
        let state = doc.snapshot();
        assert_eq!(state.lang.as_deref(), Some("en"));
        assert_eq!(state.dir.as_deref(), Some("ltr"));
    }

    #[test]
    fn headless_records_theme_palette() {
        let doc = HeadlessDocument::new();
        doc.apply_language(Language::Ar).unwrap();

        doc.apply_theme(Theme::Dark).unwrap();
        let state = doc.snapshot();
        // Theme leaves the language attributes alone.
        assert_eq!(state.dir.as_deref(), Some("rtl"));
        assert!(state.dark_class);
        assert_eq!(state.primary.as_deref(), Some("#d4af37"));
        assert_eq!(state.primary_rgb.as_deref(), Some("212,175,55"));

        doc.apply_theme(Theme::Light).unwrap();
        let state = doc.snapshot();
        assert!(!state.dark_class);
        assert_eq!(state.primary.as_deref(), Some("#0e7c3b"));
        assert_eq!(state.primary_rgb.as_deref(), Some("14,124,59"));
    }
}
