use std::rc::Rc;

use crate::config::BuildConfig;
#[cfg(target_arch = "wasm32")]
use crate::history::HistoryMode;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod handle;
pub mod routing;

pub use handle::RouterHandle;

/// Build the router for this bundle from its build-time configuration.
///
/// Called once from the wasm entry point, which owns the result and passes it
/// down through [`AppProps`].
#[must_use]
pub fn init_router() -> RouterHandle {
    let handle = RouterHandle::from_config(&BuildConfig::from_env());
    log::info!(
        "Router ready: {} route(s), {} history, base {}",
        handle.table().len(),
        handle.history().as_str(),
        handle.base().unwrap_or("/")
    );
    match handle.table().to_json() {
        Ok(json) => log::debug!("Route table: {json}"),
        Err(e) => log::warn!("Failed to render route table: {e}"),
    }
    handle
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub router: Rc<RouterHandle>,
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let router = props.router.clone();
    let routes = html! {
        <ContextProvider<Rc<RouterHandle>> context={router.clone()}>
            <AppRoutes />
        </ContextProvider<Rc<RouterHandle>>>
    };
    // No `basename`: the handle strips the base itself, so the router reports raw paths.
    match router.history() {
        HistoryMode::Browser => html! { <BrowserRouter>{ routes }</BrowserRouter> },
        HistoryMode::Hash => html! { <HashRouter>{ routes }</HashRouter> },
    }
}

/// Path of the page the app is served from; hash routers don't report it.
#[cfg(target_arch = "wasm32")]
fn page_pathname(_handle: &RouterHandle) -> String {
    crate::dom::pathname().unwrap_or_else(|| String::from("/"))
}

#[cfg(not(target_arch = "wasm32"))]
fn page_pathname(handle: &RouterHandle) -> String {
    format!("{}/", handle.base().unwrap_or(""))
}

/// Renders the view the [`RouterHandle`] resolves for the current location.
/// Expects a router and a `Rc<RouterHandle>` context above it.
#[function_component(AppRoutes)]
pub fn app_routes() -> Html {
    let handle = use_context::<Rc<RouterHandle>>();
    let location = use_location();
    let Some(handle) = handle else {
        log::error!("AppRoutes mounted without a RouterHandle context");
        return Html::default();
    };

    let current = location.map_or_else(String::new, |loc| {
        let routed = format!("{}{}{}", loc.path(), loc.query_str(), loc.hash());
        handle.location_from_router(&routed, &page_pathname(&handle))
    });
    let view = routing::view_for(handle.resolve(&current));
    if view.is_none() {
        log::warn!("No route matches {current:?}");
    }

    html! {
        <main id="main" role="main" data-testid="app-main">
            { routing::render_view(view, &handle) }
        </main>
    }
}
