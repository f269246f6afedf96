//! Default seed data loaded at startup

use uuid::Uuid;

use super::types::Book;

const SEED: [(u128, &str); 5] = [
    (0x3fa85f64_5717_4562_b3fc_2c963f66afa6, "java"),
    (0x3fa85f64_5717_4562_b3fc_2c963f66afa5, "clean code"),
    (0x3fa85f64_5717_4562_b3fc_2c963f66afa2, "network"),
    (0x3fa85f64_5717_4562_b3fc_2c963f66afa1, "frontend"),
    (0x3fa85f64_5717_4562_b3fc_2c963f66afa3, "backend"),
];

/// The five default books, in insertion order
pub fn default_books() -> Vec<Book> {
    SEED.iter()
        .map(|(id, name)| Book::new(Uuid::from_u128(*id), *name))
        .collect()
}
