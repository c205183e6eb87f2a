use crate::models::BookRecord;

/// Built-in catalog used when no feed is configured.
pub fn default_catalog() -> Vec<BookRecord> {
    let rows: &[(&str, &str, &str, &str)] = &[
        (
            "The House in the Cerulean Sea",
            "TJ Klune",
            "A warm blanket of a book. Read it with tea.",
            "Cozy",
        ),
        (
            "A Man Called Ove",
            "Fredrik Backman",
            "Grumpy on the outside, you'll be smiling by the end.",
            "Cozy",
        ),
        (
            "Kitchen",
            "Banana Yoshimoto",
            "Short, gentle, and perfect for a quiet evening.",
            "Cozy",
        ),
        (
            "Cosmos",
            "Carl Sagan",
            "Look up after reading this one!",
            "Curious",
        ),
        (
            "The Selfish Gene",
            "Richard Dawkins",
            "It will change how you see every living thing.",
            "Curious",
        ),
        (
            "Sapiens",
            "Yuval Noah Harari",
            "Our whole story in one sitting. Almost.",
            "Curious",
        ),
        (
            "The Hobbit",
            "J.R.R. Tolkien",
            "Pack a handkerchief and go on an adventure.",
            "Adventurous",
        ),
        (
            "Treasure Island",
            "Robert Louis Stevenson",
            "Pirates, maps, and a parrot. What more do you need?",
            "Adventurous",
        ),
        (
            "Hatchet",
            "Gary Paulsen",
            "Just you, the woods, and a hatchet.",
            "Adventurous",
        ),
        (
            "Letters to a Young Poet",
            "Rainer Maria Rilke",
            "For the days when you need someone to say it's okay.",
            "Comfort",
        ),
    ];

    rows.iter()
        .map(|(title, author, note, category)| BookRecord::new(*title, *author, *note, *category))
        .collect()
}
