use crate::models::Book;

/// Coarse category assigned to a chat message by keyword matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Recommendation,
    Thanks,
    Default,
}

/// Exact messages that bypass intent detection
pub const GREETING_COMMAND: &str = "greeting";
pub const RECOMMENDATION_COMMAND: &str = "book_recommendation";

// Keyword lists, checked in this order; first hit wins
pub const RECOMMENDATION_KEYWORDS: [&str; 4] = ["recommend", "suggestion", "book", "read"];
pub const GREETING_KEYWORDS: [&str; 3] = ["hello", "hi", "hey"];
pub const THANKS_KEYWORDS: [&str; 1] = ["thank"];

/// Canned reply texts
pub struct Responses;

impl Responses {
    pub const GREETING: &'static str = "Hello! I'm here to help you find your next great read";
    pub const RECOMMENDATION: &'static str = "I recommend 'The Great Gatsby' by F. Scott Fitzgerald, 'To Kill a Mockingbird' by Harper Lee, and '1984' by George Orwell.";
    pub const DEFAULT: &'static str =
        "I'm sorry, I didn't quite understand that. Can you please rephrase?";
    pub const THANKS: &'static str =
        "You're welcome! If you need more recommendations, just let me know.";
    pub const ASK_FOR_GENRE: &'static str = "Please tell me a genre you're interested in, such as fiction, non-fiction, mystery, or fantasy.";
    pub const NO_BOOKS: &'static str = "I'm sorry, but I couldn't find any books in that genre.";

    /// Render a book list as a chat reply
    pub fn recommend_books(books: &[Book]) -> String {
        if books.is_empty() {
            return Self::NO_BOOKS.to_string();
        }
        let list = books
            .iter()
            .map(Book::byline)
            .collect::<Vec<_>>()
            .join(", ");
        format!("Here are some recommendations for you: {}.", list)
    }
}
