use std::ops::Index;

use thiserror::Error;

/// The letter groups that share a digit class, in class order.
const GROUPS: [(&str, u8); 6] = [
    ("bfpv", 1),
    ("cgjkqsxz", 2),
    ("dt", 3),
    ("l", 4),
    ("mn", 5),
    ("r", 6),
];

/// Classification of every letter, built at compile time.
static CLASSIFICATION: LetterTable<Option<DigitClass>> = build_classification();

const fn build_classification() -> LetterTable<Option<DigitClass>> {
    let mut table = [None; Letter::COUNT];

    let mut g = 0;
    while g < GROUPS.len() {
        let (letters, class) = GROUPS[g];
        let letters = letters.as_bytes();

        let mut i = 0;
        while i < letters.len() {
            table[(letters[i] - b'a') as usize] = Some(DigitClass(class));
            i += 1;
        }
        g += 1;
    }

    LetterTable(table)
}

/// Digit class of `c`, ignoring case.
///
/// Vowels, `h`, `w`, `y` and everything outside `a..=z` have no class.
pub fn classify(c: char) -> Option<DigitClass> {
    Letter::new(c).and_then(|letter| CLASSIFICATION[letter])
}

pub fn is_valid_classification(classification: Option<DigitClass>) -> bool {
    classification.is_some()
}

/// Vowels separate two letters of the same class, so both get encoded.
pub fn is_separator(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DigitClass(u8);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} is not a soundex digit class, expected 1 to 6")]
pub struct InvalidDigitClass(pub u8);

impl DigitClass {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(DigitClass(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The character written into a code, `'1'` to `'6'`.
    pub fn digit(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for DigitClass {
    type Error = InvalidDigitClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDigitClass(value))
    }
}

impl From<DigitClass> for u8 {
    fn from(value: DigitClass) -> Self {
        value.0
    }
}

impl std::fmt::Display for DigitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// A Latin letter, stored as its offset from `'a'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub const COUNT: usize = 26;

    /// Case-insensitive. `None` for anything that is not an ASCII letter.
    pub fn new(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        c.is_ascii_lowercase().then(|| Letter(c as u8 - b'a'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTable<T>([T; Letter::COUNT]);

impl<T> Index<Letter> for LetterTable<T> {
    type Output = T;
    fn index(&self, index: Letter) -> &Self::Output {
        &self.0[index.0 as usize]
    }
}
