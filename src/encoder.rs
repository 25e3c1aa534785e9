use crate::code::{Code, CodeBuilder};
use crate::error::{Error, Result};
use crate::letters::{DigitClass, classify, is_separator};

/// Encodes `word` into its soundex code.
///
/// The first character is kept, uppercased, as the head of the code. The rest
/// of the word is scanned once:
///   - letters sharing the head's class right after it are dropped;
///   - each classified letter contributes its digit, unless the previous
///     classified letter had the same class;
///   - vowels break such runs, `h`, `w`, `y` and non-letters do not.
///
/// The code is cut at three digits and zero-padded to that length.
///
/// ```
/// assert_eq!(soundex::encode("Robert").unwrap().as_str(), "R163");
/// assert_eq!(soundex::encode("Rcacdl").unwrap().as_str(), "R223");
/// ```
pub fn encode(word: &str) -> Result<Code> {
    let mut chars = word.chars();
    let head = chars.next().ok_or(Error::InvalidInput)?;

    let skip = classify(head);
    let body = skip_leading_duplicates(chars.as_str(), skip);

    let mut code = CodeBuilder::new(head);
    let mut state = Suppression::after(skip);
    for c in body.chars() {
        if code.is_complete() {
            break;
        }
        let (next, emitted) = state.step(c);
        if let Some(class) = emitted {
            code.push(class);
        }
        state = next;
    }

    let code = code.finish();
    tracing::trace!(word, %code, "encoded");
    Ok(code)
}

/// Drops the letters right after the head which share its class.
///
/// The run ends at the first character of any other classification, vowels
/// included. A head without a class drops nothing.
fn skip_leading_duplicates(rest: &str, skip: Option<DigitClass>) -> &str {
    if skip.is_none() {
        return rest;
    }

    match rest.char_indices().find(|&(_, c)| classify(c) != skip) {
        Some((i, _)) => &rest[i..],
        None => "",
    }
}

/// Adjacent-duplicate memory: the class of the last classified letter seen,
/// unless a vowel came after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Suppression {
    last: Option<DigitClass>,
}

impl Suppression {
    fn after(last: Option<DigitClass>) -> Self {
        Self { last }
    }

    /// Returns the next state and the class to emit for `c`, if any.
    fn step(self, c: char) -> (Self, Option<DigitClass>) {
        match classify(c) {
            Some(class) if Some(class) == self.last => (self, None),
            Some(class) => (Self::after(Some(class)), Some(class)),
            None if is_separator(c) => (Self::after(None), None),
            None => (self, None),
        }
    }
}
