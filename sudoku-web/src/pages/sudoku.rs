use crate::paths::asset_path;
use yew::prelude::*;

pub const BOARD_SIZE: usize = 9;
const BOX_SIZE: usize = 3;

fn cell_class(row: usize, col: usize) -> Classes {
    let mut classes = classes!("sudoku-cell");
    if col % BOX_SIZE == BOX_SIZE - 1 && col + 1 < BOARD_SIZE {
        classes.push("box-right");
    }
    if row % BOX_SIZE == BOX_SIZE - 1 && row + 1 < BOARD_SIZE {
        classes.push("box-bottom");
    }
    classes
}

/// View mounted at the `Sudoku` route: header plus an empty 9×9 board.
#[function_component(SudokuPage)]
pub fn sudoku_page() -> Html {
    let rows = (0..BOARD_SIZE).map(|row| {
        let cells = (0..BOARD_SIZE).map(|col| {
            html! {
                <td
                    class={cell_class(row, col)}
                    data-row={row.to_string()}
                    data-col={col.to_string()}
                    data-testid="sudoku-cell"
                />
            }
        });
        html! { <tr>{ for cells }</tr> }
    });

    html! {
        <section class="sudoku" data-testid="sudoku-page">
            <header class="sudoku-header">
                <img src={asset_path("static/img/logo.svg")} alt="" aria-hidden="true" />
                <h1>{ "Sudoku" }</h1>
            </header>
            <table class="sudoku-board" role="grid" aria-label="Sudoku board" data-testid="sudoku-board">
                <tbody>{ for rows }</tbody>
            </table>
        </section>
    }
}
