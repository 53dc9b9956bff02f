use crate::app::RouterHandle;
use crate::pages::not_found::NotFound;
use crate::pages::sudoku::SudokuPage;
use crate::router::{RouteRecord, ViewId};
use yew::prelude::*;

/// View registered for a resolved route; `None` when nothing matched.
#[must_use]
pub fn view_for(record: Option<&RouteRecord>) -> Option<ViewId> {
    record.map(|record| record.view)
}

pub fn render_view(view: Option<ViewId>, handle: &RouterHandle) -> Html {
    match view {
        Some(ViewId::Sudoku) => html! { <SudokuPage /> },
        None => {
            let home = handle.href(ViewId::Sudoku.name()).unwrap_or_else(|| "/".into());
            html! { <NotFound home_href={AttrValue::from(home)} /> }
        }
    }
}
