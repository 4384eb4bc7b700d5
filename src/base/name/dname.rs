//! Uncompressed, absolute domain names.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::super::wire::{append_slice, Compose, ComposeError};
use super::label::Label;
use core::str::FromStr;
use core::{fmt, slice};
use octseq::builder::OctetsBuilder;

//------------ Name ----------------------------------------------------------

/// An absolute domain name.
///
/// The name is kept as a sequence of labels, most specific label first. The
/// final empty root label is implied and not part of the sequence, so the
/// root name itself has no labels at all.
///
/// A name created from a message always has all compression pointers
/// resolved. When composed, it is always written in full.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    labels: Vec<Label>,
}

/// # Creation and Conversion
///
impl Name {
    /// Returns the root name.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a name from a sequence of labels.
    ///
    /// The labels aren’t checked. Composing the name will fail if any of
    /// them is empty or longer than 63 octets.
    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        Name {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Converts the name into its labels.
    pub fn into_labels(self) -> Vec<Label> {
        self.labels
    }

    /// Appends a label to the end of the name.
    pub fn push(&mut self, label: impl Into<Label>) {
        self.labels.push(label.into())
    }
}

/// # Properties
///
impl Name {
    /// Returns the labels of the name.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns an iterator over the labels.
    pub fn iter(&self) -> slice::Iter<'_, Label> {
        self.labels.iter()
    }

    /// Returns the number of labels, not counting the root label.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether this is the root name.
    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the length of the uncompressed wire format of the name.
    pub fn compose_len(&self) -> usize {
        self.labels.iter().map(Label::compose_len).sum::<usize>() + 1
    }
}

//--- From

impl From<Vec<Label>> for Name {
    fn from(labels: Vec<Label>) -> Self {
        Name { labels }
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a Label;
    type IntoIter = slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Compose

impl Compose for Name {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        for label in &self.labels {
            label.compose(target)?;
        }
        append_slice(target, b"\0")
    }
}

//--- FromStr

impl FromStr for Name {
    type Err = FromStrError;

    /// Creates a name from its presentation format.
    ///
    /// Labels are separated by dots and a final dot is optional. A single
    /// dot is the root name. Within a label, a backslash escapes the next
    /// character or, if followed by three decimal digits, stands for the
    /// octet of that value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FromStrError::Empty);
        }
        if s == "." {
            return Ok(Name::root());
        }
        let mut res = Name::root();
        let mut label = Vec::new();
        let mut chars = s.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '.' => {
                    res.push(take_label(&mut label)?);
                }
                '\\' => label.push(parse_escape(&mut chars)?),
                ' '..='-' | '/'..='[' | ']'..='~' => label.push(ch as u8),
                _ => return Err(FromStrError::IllegalCharacter(ch)),
            }
        }
        if !label.is_empty() {
            res.push(take_label(&mut label)?);
        }
        Ok(res)
    }
}

/// Moves the collected octets into a new label.
fn take_label(label: &mut Vec<u8>) -> Result<Label, FromStrError> {
    if label.is_empty() {
        return Err(FromStrError::EmptyLabel);
    }
    if label.len() > Label::MAX_LEN {
        return Err(FromStrError::LongLabel);
    }
    Ok(Label::from_vec(core::mem::take(label)))
}

/// Parses the part of an escape sequence following the backslash.
fn parse_escape(chars: &mut core::str::Chars) -> Result<u8, FromStrError> {
    let ch = chars.next().ok_or(FromStrError::UnexpectedEnd)?;
    if let Some(hundreds) = ch.to_digit(10) {
        let mut value = hundreds;
        for _ in 0..2 {
            let digit = chars
                .next()
                .ok_or(FromStrError::UnexpectedEnd)?
                .to_digit(10)
                .ok_or(FromStrError::IllegalEscape)?;
            value = value * 10 + digit;
        }
        u8::try_from(value).map_err(|_| FromStrError::IllegalEscape)
    } else if ch.is_ascii() && ch != '\0' {
        Ok(ch as u8)
    } else {
        Err(FromStrError::IllegalEscape)
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    /// Formats the name with a trailing dot.
    ///
    /// The root name is formatted as a single dot.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in &self.labels {
            write!(f, "{}.", label)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//------------ FromStrError --------------------------------------------------

/// An error happened while creating a name from a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// The string was empty.
    Empty,

    /// A label other than the last was empty.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// A character that must be escaped was not.
    IllegalCharacter(char),

    /// An escape sequence was malformed.
    IllegalEscape,

    /// The string ended inside an escape sequence.
    UnexpectedEnd,
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FromStrError::Empty => f.write_str("empty domain name"),
            FromStrError::EmptyLabel => f.write_str("empty label"),
            FromStrError::LongLabel => f.write_str("long label"),
            FromStrError::IllegalCharacter(ch) => {
                write!(f, "illegal character '{}'", ch)
            }
            FromStrError::IllegalEscape => f.write_str("illegal escape"),
            FromStrError::UnexpectedEnd => {
                f.write_str("unexpected end of input")
            }
        }
    }
}

impl std::error::Error for FromStrError {}

//============ Testing =======================================================
