//! Challenge rating → base XP table

/// Base XP per challenge rating, ordered from weakest to strongest.
pub const CHALLENGE_RATING_XP: [(&str, u64); 34] = [
    ("0", 10),
    ("1/8", 25),
    ("1/4", 50),
    ("1/2", 100),
    ("1", 200),
    ("2", 450),
    ("3", 700),
    ("4", 1_100),
    ("5", 1_800),
    ("6", 2_300),
    ("7", 2_900),
    ("8", 3_900),
    ("9", 5_000),
    ("10", 5_900),
    ("11", 7_200),
    ("12", 8_400),
    ("13", 10_000),
    ("14", 11_500),
    ("15", 13_000),
    ("16", 15_000),
    ("17", 18_000),
    ("18", 20_000),
    ("19", 22_000),
    ("20", 25_000),
    ("21", 33_000),
    ("22", 41_000),
    ("23", 50_000),
    ("24", 62_000),
    ("25", 75_000),
    ("26", 90_000),
    ("27", 105_000),
    ("28", 120_000),
    ("29", 135_000),
    ("30", 155_000),
];

/// Base XP for a challenge rating string, `None` if it isn't in the table
pub fn xp_for_challenge_rating(challenge_rating: &str) -> Option<u64> {
    CHALLENGE_RATING_XP
        .iter()
        .find(|(cr, _)| *cr == challenge_rating)
        .map(|&(_, xp)| xp)
}

/// All valid challenge rating strings in ascending order
pub fn challenge_ratings() -> impl Iterator<Item = &'static str> {
    CHALLENGE_RATING_XP.iter().map(|&(cr, _)| cr)
}

pub fn is_known_challenge_rating(challenge_rating: &str) -> bool {
    xp_for_challenge_rating(challenge_rating).is_some()
}
