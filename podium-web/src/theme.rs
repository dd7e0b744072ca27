//! Persisted light/dark preference. Dark is the default; the light
//! preference is stored under one key and applied as a class on the
//! root element.

const STORAGE_KEY: &str = "podium.light";
const LIGHT_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to Light Mode",
            Self::Light => "Switch to Dark Mode",
        }
    }
}

/// The saved preference, dark when nothing is stored (and on hosts
/// without a window, such as server rendering).
#[must_use]
pub fn saved_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        if stored.is_some_and(|v| v == "1") {
            return Theme::Light;
        }
    }
    Theme::Dark
}

/// Apply a theme to the document and persist it. A no-op off the
/// browser.
pub fn set_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(win) = web_sys::window() else {
            return;
        };
        if let Some(html) = win.document().and_then(|doc| doc.document_element()) {
            let _ = match theme {
                Theme::Light => html.class_list().add_1(LIGHT_CLASS),
                Theme::Dark => html.class_list().remove_1(LIGHT_CLASS),
            };
        }
        if let Some(storage) = win.local_storage().ok().flatten() {
            let _ = storage.set_item(STORAGE_KEY, if theme == Theme::Light { "1" } else { "0" });
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}
