use shared::render::book_rows;
use shared::Book;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BooksTableProps {
    pub books: Vec<Book>,
    pub loading: bool,
}

/// Redraws every row from `books` in the order the server sent them
#[function_component(BooksTable)]
pub fn books_table(props: &BooksTableProps) -> Html {
    html! {
        <section class="books-section">
            <div class="table-container">
                <table id="books-table" class="books-table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Title"}</th>
                            <th>{"Author"}</th>
                            <th>{"Published"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for book_rows(&props.books).into_iter().map(|cells| {
                            html! {
                                <tr>
                                    {for cells.into_iter().map(|cell| html! { <td>{cell}</td> })}
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
            if props.loading {
                <div class="loading">{"Loading books..."}</div>
            }
        </section>
    }
}
