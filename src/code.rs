use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::letters::DigitClass;

/// Number of characters in every code: the head and three digits.
pub const CODE_LENGTH: usize = 4;

/// A soundex code such as `R163`.
///
/// Always holds exactly [`CODE_LENGTH`] characters. The head is the
/// uppercased first character of the encoded word and is kept even when it
/// is not a letter; the rest are digits `'0'..='6'`, with zeros only as
/// right padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code {
    head: char,
    text: String,
}

impl Code {
    pub fn head(&self) -> char {
        self.head
    }

    /// The three characters after the head.
    pub fn digits(&self) -> &str {
        &self.text[self.head.len_utf8()..]
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Uppercase form of a head character.
///
/// Characters whose uppercase form is longer than one character (`'ß'`) are
/// kept as they are, so that the code length stays fixed.
pub fn uppercase_head(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Code> for String {
    fn from(value: Code) -> Self {
        value.text
    }
}

impl TryFrom<String> for Code {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        let invalid = |reason| Error::InvalidCode {
            code: value.clone(),
            reason,
        };

        let mut chars = value.chars();
        let head = chars.next().ok_or_else(|| invalid("code is empty"))?;
        if value.chars().count() != CODE_LENGTH {
            return Err(invalid("expected exactly 4 characters"));
        }
        if uppercase_head(head) != head {
            return Err(invalid("head must be uppercase"));
        }

        let mut padding = false;
        for c in chars {
            match c {
                '0' => padding = true,
                '1'..='6' if padding => return Err(invalid("digit after zero padding")),
                '1'..='6' => {}
                _ => return Err(invalid("digits must be in 0 to 6")),
            }
        }

        Ok(Code { head, text: value })
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s.to_string())
    }
}

/// Accumulates a code one digit at a time.
#[derive(Debug, Clone)]
pub(crate) struct CodeBuilder {
    head: char,
    text: String,
    len: usize,
}

impl CodeBuilder {
    pub fn new(head: char) -> Self {
        let head = uppercase_head(head);
        let mut text = String::with_capacity(CODE_LENGTH + head.len_utf8());
        text.push(head);
        Self { head, text, len: 1 }
    }

    pub fn push(&mut self, class: DigitClass) {
        if self.is_complete() {
            panic!("code {:?} is already complete", self.text);
        }
        self.text.push(class.digit());
        self.len += 1;
    }

    pub fn is_complete(&self) -> bool {
        self.len >= CODE_LENGTH
    }

    /// Pads with zeros up to [`CODE_LENGTH`].
    pub fn finish(mut self) -> Code {
        while self.len < CODE_LENGTH {
            self.text.push('0');
            self.len += 1;
        }
        Code {
            head: self.head,
            text: self.text,
        }
    }
}
