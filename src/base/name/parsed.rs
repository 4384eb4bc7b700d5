//! Parsing possibly compressed domain names from messages.
//!
//! This is a private module. It adds parsing to [`Name`].

use super::super::config::ParseConfig;
use super::super::wire::{Cursor, Parse, ParseError};
use super::dname::Name;
use super::label::Label;
use tracing::trace;

//------------ Parsing Name --------------------------------------------------

impl Name {
    /// Parses a name from the current position of `cursor`.
    ///
    /// The name may end in a compression pointer. The labels it points to
    /// become part of the returned name. Afterwards, the cursor is
    /// positioned right behind the name as it appears at the original
    /// position, i.e., behind the first pointer if there is one.
    ///
    /// Every pointer must point to a position before its own first octet.
    /// At most [`max_pointer_hops`][ParseConfig::max_pointer_hops] pointers
    /// are followed, which also ends any loop. If either rule is broken,
    /// parsing fails with [`ParseError::CompressionLoopDetected`]. A pointer
    /// beyond the end of the message results in
    /// [`ParseError::InvalidOffset`].
    pub fn parse_with_config(
        cursor: &mut Cursor<'_>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        let mut labels = Vec::new();

        // Phase One: No compression pointers have been found yet.
        //
        // Labels are read from the caller’s cursor which thus ends up
        // behind the name.
        let mut ptr = match parse_labels(cursor, &mut labels)? {
            Some(ptr) => ptr,
            None => return Ok(labels.into()),
        };

        // Phase Two: Compression has occured.
        //
        // Continue on a fork of the cursor, jumping from pointer to
        // pointer. Each pointer has to point backwards from where it sits.
        let mut hops = 0;
        loop {
            hops += 1;
            if hops > config.max_pointer_hops() {
                trace!(hops, "too many compression pointers");
                return Err(ParseError::CompressionLoopDetected);
            }
            let mut fork = cursor.fork_at(ptr.target)?;
            if ptr.target >= ptr.pos {
                trace!(
                    from = ptr.pos,
                    to = ptr.target,
                    "compression pointer does not point backwards"
                );
                return Err(ParseError::CompressionLoopDetected);
            }
            trace!(
                from = ptr.pos,
                to = ptr.target,
                hops,
                "following compression pointer"
            );
            ptr = match parse_labels(&mut fork, &mut labels)? {
                Some(ptr) => ptr,
                None => return Ok(labels.into()),
            };
        }
    }
}

impl<'a> Parse<'a> for Name {
    /// Parses a name using the default configuration.
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError> {
        Self::parse_with_config(cursor, &ParseConfig::default())
    }
}

/// Reads labels into `labels` until the root label or a pointer.
///
/// Returns the pointer if there was one.
fn parse_labels(
    cursor: &mut Cursor<'_>,
    labels: &mut Vec<Label>,
) -> Result<Option<Pointer>, ParseError> {
    loop {
        let pos = cursor.pos();
        match LabelType::parse(cursor)? {
            LabelType::Normal(0) => return Ok(None),
            LabelType::Normal(len) => {
                labels.push(cursor.read_bytes(len.into())?.into());
            }
            LabelType::Compressed(target) => {
                return Ok(Some(Pointer { pos, target }))
            }
        }
    }
}

//------------ Pointer -------------------------------------------------------

/// A compression pointer found in a message.
#[derive(Clone, Copy, Debug)]
struct Pointer {
    /// The position of the pointer’s first octet.
    pos: usize,

    /// The position the pointer points to.
    target: usize,
}

//------------ LabelType -----------------------------------------------------

/// The type of a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LabelType {
    /// A normal label with its size in octets.
    Normal(u8),

    /// A compressed label with the position of where to continue.
    Compressed(usize),
}

impl LabelType {
    /// Attempts to take a label type from the beginning of `cursor`.
    fn parse(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let ltype = cursor.read_u8()?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype)),
            0xC0..=0xFF => {
                let res = usize::from(cursor.read_u8()?);
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(ParseError::InvalidLabelEncoding),
        }
    }
}

//============ Testing =======================================================
