//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::super::wire::{append_slice, Compose, ComposeError};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Label ---------------------------------------------------------

/// The content of a single domain name label.
///
/// A label only contains the label’s content, not the length octet it is
/// preceded by in wire format. The root label that ends every name in a
/// message is never stored as a value of this type.
///
/// In a message, a label can be at most 63 octets long since the two upper
/// bits of the length octet are used to mark compression pointers. This
/// limit is enforced when the label is composed, not when it is created, so
/// a label read from elsewhere can be kept around unchanged.
///
/// Unlike the labels of a full resolver, comparison is a plain comparison
/// of octets. No ASCII case folding is done.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label(Vec<u8>);

/// # Creation and Conversion
///
impl Label {
    /// Domain name labels have a maximum length of 63 octets.
    pub const MAX_LEN: usize = 63;

    /// Creates a label from a copy of the slice.
    pub fn from_slice(slice: &[u8]) -> Self {
        Label(slice.into())
    }

    /// Creates a label from an octets vec.
    pub fn from_vec(vec: Vec<u8>) -> Self {
        Label(vec)
    }

    /// Returns a reference to the label’s content.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Converts the label into its content.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

/// # Properties
///
impl Label {
    /// Returns the length of the label’s content.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the label is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length of the label’s wire format.
    pub fn compose_len(&self) -> usize {
        self.0.len() + 1
    }
}

//--- From

impl From<&[u8]> for Label {
    fn from(slice: &[u8]) -> Self {
        Label::from_slice(slice)
    }
}

impl From<Vec<u8>> for Label {
    fn from(vec: Vec<u8>) -> Self {
        Label::from_vec(vec)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::from_slice(s.as_bytes())
    }
}

//--- AsRef

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- PartialEq with raw octets

impl PartialEq<[u8]> for Label {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

//--- Compose

impl Compose for Label {
    /// Appends the length octet and the content of the label.
    ///
    /// Fails with [`ComposeError::LabelTooLong`] if the label is longer than
    /// 63 octets and with [`ComposeError::EmptyLabel`] if it is empty, since
    /// an empty label would end the name early.
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        if self.len() > Label::MAX_LEN {
            return Err(ComposeError::LabelTooLong);
        }
        if self.is_empty() {
            return Err(ComposeError::EmptyLabel);
        }
        append_slice(target, &[self.len() as u8])?;
        append_slice(target, self.as_slice())
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.as_slice() {
            if ch == b' ' || ch == b'.' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if !(0x20..0x7F).contains(&ch) {
                write!(f, "\\{:03}", ch)?;
            } else {
                write!(f, "{}", (ch as char))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Label(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//============ Testing =======================================================
