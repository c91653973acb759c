//! Literal sample content
//!
//! Fixed books, achievements and quiz questions used by the demo screens.
//! Nothing here is computed: unlock state and scores are part of the data.

use serde::{Deserialize, Serialize};

/// A book in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identifier used in routes
    pub id: String,
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Cover accent color
    pub cover_color: String,
    /// Reading level label
    pub reading_level: String,
    /// Page count
    pub pages: u32,
}

/// An achievement badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Identifier
    pub id: String,
    /// Badge title
    pub title: String,
    /// What the badge is for
    pub description: String,
    /// Icon name
    pub icon: String,
    /// Whether the badge shows as earned
    pub unlocked: bool,
}

/// A multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Identifier
    pub id: String,
    /// Book the question belongs to
    pub book_id: String,
    /// Question text
    pub prompt: String,
    /// Answer options in display order
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub answer_index: usize,
}

fn book(id: &str, title: &str, author: &str, cover_color: &str, level: &str, pages: u32) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        cover_color: cover_color.to_string(),
        reading_level: level.to_string(),
        pages,
    }
}

fn achievement(id: &str, title: &str, description: &str, icon: &str, unlocked: bool) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        unlocked,
    }
}

fn question(id: &str, book_id: &str, prompt: &str, options: [&str; 4], answer_index: usize) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        book_id: book_id.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        answer_index,
    }
}

/// Sample catalogue
pub fn books() -> Vec<Book> {
    vec![
        book("hobbit", "The Hobbit", "J.R.R. Tolkien", "#2E7D32", "Grade 6+", 310),
        book("little-prince", "The Little Prince", "Antoine de Saint-Exupery", "#F9A825", "Grade 3+", 96),
        book("charlottes-web", "Charlotte's Web", "E.B. White", "#C2185B", "Grade 3+", 192),
        book("matilda", "Matilda", "Roald Dahl", "#1565C0", "Grade 4+", 240),
    ]
}

/// Look up a sample book
pub fn book_by_id(id: &str) -> Option<Book> {
    books().into_iter().find(|b| b.id == id)
}

/// Sample achievements
pub fn achievements() -> Vec<Achievement> {
    vec![
        achievement("first-scan", "First Scan", "Scan your first book cover", "camera", true),
        achievement("bookworm", "Bookworm", "Finish five books", "book-open", false),
        achievement("quiz-whiz", "Quiz Whiz", "Score 100% on a quiz", "star", true),
        achievement("explorer", "AR Explorer", "Open the AR view ten times", "compass", false),
    ]
}

/// Sample questions for a book, empty when the book has none
pub fn quiz_questions(book_id: &str) -> Vec<QuizQuestion> {
    let all = vec![
        question(
            "hobbit-1",
            "hobbit",
            "What is Bilbo's home called?",
            ["Rivendell", "Bag End", "Lonely Mountain", "Mirkwood"],
            1,
        ),
        question(
            "hobbit-2",
            "hobbit",
            "Who is the dragon guarding the treasure?",
            ["Smaug", "Glaurung", "Ancalagon", "Scatha"],
            0,
        ),
        question(
            "hobbit-3",
            "hobbit",
            "What does Bilbo find in the goblin caves?",
            ["A sword", "A map", "A ring", "A key"],
            2,
        ),
        question(
            "little-prince-1",
            "little-prince",
            "Where does the little prince live?",
            ["Earth", "The Moon", "Asteroid B-612", "Mars"],
            2,
        ),
        question(
            "little-prince-2",
            "little-prince",
            "What does the prince care for on his planet?",
            ["A rose", "A fox", "A sheep", "A baobab"],
            0,
        ),
    ];

    all.into_iter().filter(|q| q.book_id == book_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_ids_unique() {
        let books = books();
        let mut ids: Vec<_> = books.iter().map(|b| b.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), books.len());
    }

    #[test]
    fn test_book_lookup() {
        assert_eq!(book_by_id("hobbit").map(|b| b.title), Some("The Hobbit".to_string()));
        assert!(book_by_id("unknown").is_none());
    }

    #[test]
    fn test_quiz_questions_filtered() {
        let questions = quiz_questions("hobbit");
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.book_id == "hobbit"));
        assert!(questions.iter().all(|q| q.answer_index < q.options.len()));
        assert!(quiz_questions("matilda").is_empty());
    }

    #[test]
    fn test_achievements_fixed() {
        let unlocked = achievements().iter().filter(|a| a.unlocked).count();
        assert_eq!(unlocked, 2);
    }
}
