use quotebook_core::quotes::Quote;

/// Quotes present when the service starts, assigned ids 1..=5 in order.
pub const SEED_QUOTES: [&str; 5] = [
    "The greatest glory in living lies not in never falling, but in rising every time we fall. -Nelson Mandela",
    "If life were predictable it would cease to be life, and be without flavor. -Eleanor Roosevelt",
    "The best and most beautiful things in the world cannot be seen or even touched - they must be felt with the heart. -Helen Keller",
    "Tell me and I forget. Teach me and I remember. Involve me and I learn. -Benjamin Franklin",
    "You will face many defeats in life, but never let yourself be defeated. -Maya Angelou",
];

pub fn seed_quotes() -> Vec<Quote> {
    SEED_QUOTES
        .iter()
        .zip(1..)
        .map(|(text, id)| Quote::new(id, *text))
        .collect()
}
