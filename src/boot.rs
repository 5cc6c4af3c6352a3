//! JavaScript entry points.
//!
//! The page loads the generated module and calls one of the exports once:
//!
//! ```js
//! import init, { boot, boot_with_config } from "./pkg/folio.js";
//! await init();
//! boot(); // stock markup and phrases
//! // or
//! boot_with_config(JSON.stringify({ typewriter: { phrases: ["Rustacean"] } }));
//! ```
//!
//! If the document is still loading, mounting waits for `DOMContentLoaded`.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use std::fmt;

#[cfg(feature = "hydrate")]
pub use browser::{boot, boot_with_config, stop_typewriter};

/// What a boot attached to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mounted {
    pub typewriter: bool,
    pub nav: bool,
    pub scroll_spy_sections: usize,
}

impl Mounted {
    /// `true` when the page had none of the expected elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.typewriter && !self.nav && self.scroll_spy_sections == 0
    }
}

impl fmt::Display for Mounted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        write!(
            f,
            "typewriter={} nav={} scroll_spy={} sections",
            on_off(self.typewriter),
            on_off(self.nav),
            self.scroll_spy_sections
        )
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};

    use interact::schedule::CancelToken;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Window};

    use super::Mounted;
    use crate::config::SiteConfig;
    use crate::dom::listen;
    use crate::mount::{mount_nav_toggle, mount_scroll_spy, mount_typewriter};

    thread_local! {
        static BOOTED: Cell<bool> = const { Cell::new(false) };
        static TYPEWRITER: RefCell<Option<CancelToken>> = const { RefCell::new(None) };
    }

    /// Mount every behavior with the default configuration.
    #[wasm_bindgen]
    pub fn boot() {
        start(SiteConfig::default());
    }

    /// Mount every behavior with a JSON configuration. Fields left out keep
    /// their defaults. An invalid configuration mounts nothing and is
    /// returned to the caller as an error string.
    #[wasm_bindgen]
    pub fn boot_with_config(json: &str) -> Result<(), JsValue> {
        let config = SiteConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        start(config);
        Ok(())
    }

    /// Stop the typewriter animation. The subtitle keeps its current text.
    #[wasm_bindgen]
    pub fn stop_typewriter() {
        if let Some(token) = TYPEWRITER.with(|slot| slot.borrow_mut().take()) {
            token.cancel();
            log::info!("typewriter stopped");
        }
    }

    fn start(config: SiteConfig) {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(config.log_level.as_level()).is_err() {
            log::debug!("console logger already installed");
        }
        if BOOTED.with(|booted| booted.replace(true)) {
            log::warn!("folio already booted; ignoring repeated boot");
            return;
        }

        let Some(window) = web_sys::window() else {
            log::warn!("no window; nothing to mount");
            return;
        };
        let Some(document) = window.document() else {
            log::warn!("no document; nothing to mount");
            return;
        };

        if document.ready_state() == "loading" {
            let mut pending = Some(config);
            let ready_window = window.clone();
            let ready_document = document.clone();
            listen(&document, "DOMContentLoaded", move |_| {
                if let Some(config) = pending.take() {
                    mount_all(&ready_window, &ready_document, &config);
                }
            });
        } else {
            mount_all(&window, &document, &config);
        }
    }

    fn mount_all(window: &Window, document: &Document, config: &SiteConfig) {
        let typewriter = match mount_typewriter(document, &config.typewriter) {
            Ok(token) => token,
            Err(err) => {
                log::error!("typewriter not started: {err}");
                None
            }
        };
        let mounted = Mounted {
            typewriter: typewriter.is_some(),
            nav: mount_nav_toggle(document, &config.nav),
            scroll_spy_sections: mount_scroll_spy(window, document, &config.scroll_spy),
        };
        TYPEWRITER.with(|slot| *slot.borrow_mut() = typewriter);

        if mounted.is_empty() {
            log::warn!("folio found none of its elements on this page");
        } else {
            log::info!("folio mounted: {mounted}");
        }
    }
}
