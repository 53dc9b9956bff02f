use yew::prelude::*;

/// Not-found page to show when the location matches no route.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub home_href: AttrValue,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive" data-testid="not-found">
            <h1>{ "Page not found" }</h1>
            <p>{ "There is no puzzle at this address." }</p>
            <a href={props.home_href.clone()} data-testid="not-found-home">
                { "Back to Sudoku" }
            </a>
        </section>
    }
}
