//! Typewriter on the hero subtitle.

use interact::schedule::CancelToken;
use interact::surface::run_typewriter;
use web_sys::Document;

use crate::config::{ConfigError, TypewriterSettings};
use crate::dom::{BrowserTimers, DomElement};

/// Start the typewriter on `#<element_id>`. Returns the token that stops it,
/// or `None` when the element is absent.
///
/// # Errors
///
/// Returns [`ConfigError::Typewriter`] if the phrase list is empty, whether or
/// not the element exists.
pub fn mount_typewriter(document: &Document, settings: &TypewriterSettings) -> Result<Option<CancelToken>, ConfigError> {
    let typewriter = settings.build()?;
    let Some(element) = document.get_element_by_id(&settings.element_id) else {
        log::debug!("no #{} element; typewriter skipped", settings.element_id);
        return Ok(None);
    };

    let token = CancelToken::new();
    log::info!("typewriter started on #{} with {} phrases", settings.element_id, typewriter.phrases().len());
    run_typewriter(BrowserTimers, token.clone(), typewriter, DomElement(element));
    Ok(Some(token))
}
