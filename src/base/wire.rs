//! Creating and consuming data in wire format.
//!
//! Parsing happens on a [`Cursor`] atop the octets of a complete message.
//! Composing appends to any [`OctetsBuilder`], most commonly a `Vec<u8>`.

use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf, Truncate};
use octseq::parse::{Parser, ShortInput};

//------------ Cursor --------------------------------------------------------

/// A read position atop the octets of a DNS message.
///
/// The cursor never owns the message. It only ever moves forward, except
/// that [`fork_at`][Self::fork_at] hands out a second cursor positioned
/// anywhere in the same message. This is what following a compression
/// pointer needs: the original cursor stays put right after the pointer
/// while the fork wanders off to the referenced labels.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    /// The complete message.
    packet: &'a [u8],

    /// The parser doing the actual work.
    parser: Parser<'a, [u8]>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `packet`.
    pub fn new(packet: &'a [u8]) -> Self {
        Cursor {
            packet,
            parser: Parser::from_ref(packet),
        }
    }

    /// Returns a new cursor over the same message positioned at `offset`.
    ///
    /// Returns [`ParseError::InvalidOffset`] if `offset` lies beyond the end
    /// of the message.
    pub fn fork_at(&self, offset: usize) -> Result<Self, ParseError> {
        if offset > self.packet.len() {
            return Err(ParseError::InvalidOffset);
        }
        let mut res = Cursor::new(self.packet);
        res.parser.seek(offset)?;
        Ok(res)
    }

    /// Returns the current position relative to the start of the message.
    pub fn pos(&self) -> usize {
        self.parser.pos()
    }

    /// Returns the number of octets left to read.
    pub fn remaining(&self) -> usize {
        self.parser.remaining()
    }

    pub fn read_u8(&mut self) -> Result<u8, ParseError> {
        self.parser.parse_u8().map_err(Into::into)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, ParseError> {
        self.parser.parse_u16_be().map_err(Into::into)
    }

    pub fn read_u32_be(&mut self) -> Result<u32, ParseError> {
        self.parser.parse_u32_be().map_err(Into::into)
    }

    /// Takes the next `len` octets.
    ///
    /// The returned slice borrows from the message, not from the cursor.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        let start = self.parser.pos();
        self.parser.advance(len)?;
        Ok(&self.packet[start..self.parser.pos()])
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos())
            .field("len", &self.packet.len())
            .finish()
    }
}

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value from a cursor.
///
/// If parsing fails and an error is returned, the cursor’s position should
/// be considered to be undefined.
pub trait Parse<'a>: Sized {
    /// Extracts a value from the current position of `cursor`.
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError>;
}

impl<'a> Parse<'a> for u8 {
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError> {
        cursor.read_u8()
    }
}

impl<'a> Parse<'a> for u16 {
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError> {
        cursor.read_u16_be()
    }
}

impl<'a> Parse<'a> for u32 {
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError> {
        cursor.read_u32_be()
    }
}

//------------ Compose -------------------------------------------------------

/// A type that knows how to append its wire format to an octets builder.
pub trait Compose {
    /// The length of the wire format if it is the same for all values.
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        (*self).compose(target)
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        append_slice(target, &[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), ComposeError> {
                append_slice(target, &self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);

/// Appends a slice to the target, translating the target’s error.
pub fn append_slice<Target: OctetsBuilder + ?Sized>(
    target: &mut Target,
    slice: &[u8],
) -> Result<(), ComposeError> {
    target.append_slice(slice).map_err(|err| {
        let err: ShortBuf = err.into();
        err.into()
    })
}

//------------ Composer ------------------------------------------------------

/// An octets builder a whole message can be composed into.
///
/// Composing a message may fail half way through. A composer can be
/// truncated back to where it was before, so a failed message leaves no
/// trace in it.
pub trait Composer: OctetsBuilder + AsRef<[u8]> + Truncate {}

impl<T: OctetsBuilder + AsRef<[u8]> + Truncate + ?Sized> Composer for T {}

/// Runs `op` on `target`, undoing everything it appended if it fails.
pub fn compose_or_rewind<Target, F>(
    target: &mut Target,
    op: F,
) -> Result<(), ComposeError>
where
    Target: Composer + ?Sized,
    F: FnOnce(&mut Target) -> Result<(), ComposeError>,
{
    let start = target.as_ref().len();
    match op(&mut *target) {
        Ok(()) => Ok(()),
        Err(err) => {
            target.truncate(start);
            Err(err)
        }
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Fewer octets were left than a field or record declares.
    TruncatedInput,

    /// A label header used one of the reserved bit patterns `01` or `10`.
    InvalidLabelEncoding,

    /// A compression pointer pointed beyond the end of the message.
    InvalidOffset,

    /// A compression pointer did not point backwards or a name needed too
    /// many pointers.
    CompressionLoopDetected,
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::TruncatedInput
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ParseError::TruncatedInput => "unexpected end of input",
            ParseError::InvalidLabelEncoding => "invalid label type",
            ParseError::InvalidOffset => {
                "compression pointer beyond end of message"
            }
            ParseError::CompressionLoopDetected => {
                "compression pointer loop detected"
            }
        })
    }
}

impl std::error::Error for ParseError {}

//------------ ComposeError --------------------------------------------------

/// An error happened while composing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// A label was longer than 63 octets.
    LabelTooLong,

    /// A label other than the final root label was empty.
    EmptyLabel,

    /// A section held more than 65535 entries.
    SectionTooLarge,

    /// Record data was longer than 65535 octets.
    RdataTooLong,

    /// A header field held a value too large for its width on the wire.
    FieldOutOfRange,

    /// The target ran out of space.
    ShortBuf,
}

impl From<ShortBuf> for ComposeError {
    fn from(_: ShortBuf) -> Self {
        ComposeError::ShortBuf
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ComposeError::LabelTooLong => "long label",
            ComposeError::EmptyLabel => "empty label",
            ComposeError::SectionTooLarge => "too many entries in section",
            ComposeError::RdataTooLong => "long record data",
            ComposeError::FieldOutOfRange => "header field out of range",
            ComposeError::ShortBuf => "buffer size exceeded",
        })
    }
}

impl std::error::Error for ComposeError {}

//============ Testing =======================================================
