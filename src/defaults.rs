use std::path::Path;

use daylight_core::{FeetDocument, HostError};

/// Host document from a level export, or the demo levels when none is usable.
pub fn load_host_document(levels_path: Option<&Path>) -> (FeetDocument, Option<HostError>) {
    let Some(path) = levels_path else {
        log::info!("No level export given, using demo levels");
        return (FeetDocument::demo(), None);
    };

    match FeetDocument::load_from_file(path) {
        Ok(document) => (document, None),
        Err(e) => {
            log::warn!("{}; using demo levels", e);
            (FeetDocument::demo(), Some(e))
        }
    }
}
