use web_sys::{Document, Element, Window};

/// Id of the element the app mounts into when the host page provides one.
pub const APP_ROOT_ID: &str = "app";

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Mount point for the app; `None` means render into `<body>`.
#[must_use]
pub fn app_root() -> Option<Element> {
    document()?.get_element_by_id(APP_ROOT_ID)
}

/// `location.pathname` of the current page.
#[must_use]
pub fn pathname() -> Option<String> {
    window()?.location().pathname().ok()
}
