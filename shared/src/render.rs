//! Text formatting behind the tables and cards. Every redraw goes through
//! these, so identical input always gives identical rows.

use crate::{Book, User};

/// id, title, author, published
pub fn book_row(book: &Book) -> [String; 4] {
    [
        book.id.to_string(),
        book.title.clone(),
        book.author.clone(),
        book.published.clone(),
    ]
}

pub fn book_rows(books: &[Book]) -> Vec<[String; 4]> {
    books.iter().map(book_row).collect()
}

/// id, email, role
pub fn user_row(user: &User) -> [String; 3] {
    [user.id.to_string(), user.email.clone(), user.role.clone()]
}

pub fn card_price(price: f64) -> String {
    format!("Price: ${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        serde_json::from_str(
            r#"{"id":1,"title":"Dune","author":"Herbert","published":"1965-08-01"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_single_book_row_in_column_order() {
        let rows = book_rows(&[dune()]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], ["1", "Dune", "Herbert", "1965-08-01"]);
    }

    #[test]
    fn test_redraw_is_stable() {
        let books = vec![dune(), Book { id: 2, title: "Emma".to_string(), ..dune() }];
        assert_eq!(book_rows(&books), book_rows(&books));
        assert_eq!(book_rows(&books)[1][1], "Emma");
    }

    #[test]
    fn test_rows_keep_server_order() {
        let books = vec![Book { id: 9, ..dune() }, Book { id: 3, ..dune() }];
        let ids: Vec<String> = book_rows(&books).into_iter().map(|row| row[0].clone()).collect();
        assert_eq!(ids, vec!["9", "3"]);
    }

    #[test]
    fn test_markup_is_kept_as_text() {
        let book = Book {
            title: "<b>Bold</b>".to_string(),
            ..dune()
        };
        assert_eq!(book_row(&book)[1], "<b>Bold</b>");
    }

    #[test]
    fn test_user_row() {
        let user = User {
            id: 4,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role: "user".to_string(),
        };
        assert_eq!(user_row(&user), ["4", "ann@example.com", "user"]);
    }

    #[test]
    fn test_card_price_two_decimals() {
        assert_eq!(card_price(12.5), "Price: $12.50");
        assert_eq!(card_price(3.0), "Price: $3.00");
    }
}
