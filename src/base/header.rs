//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of records in each of the four sections that follow the header.
//! Its content and format are defined in section 4.1.1 of [RFC 1035].
//!
//! The section counts are not a property of a message but of the sections
//! themselves. So the header has been split into two types: [`Header`]
//! contains the first four octets which are kept by a message and
//! [`HeaderCounts`] contains the section counts which only ever exist while
//! a message is parsed or composed.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{Compose, ComposeError, Cursor, Parse, ParseError};
use core::{fmt, str::FromStr};
use octseq::builder::OctetsBuilder;

//------------ Header --------------------------------------------------

/// The first part of the header of a DNS message.
///
/// This type represents the information contained in the first four octets
/// of the header: the message ID, opcode, rcode, and the various flags. The
/// octets are layed out like this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// The three Z bits are reserved. They are ignored when parsing and
/// always composed as zero.
///
/// The conversion between the second pair of octets and the fields of this
/// type happens in [`from_flags_word`][Self::from_flags_word] and
/// [`to_flags_word`][Self::to_flags_word] and nowhere else.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// The ID field.
    ///
    /// The ID field is an identifier chosen by whoever created a query
    /// and is copied into a response by a server. It allows matching
    /// incoming responses to their queries.
    pub id: u16,

    /// The kind of query the message contains.
    pub opcode: Opcode,

    /// The flag bits.
    pub flags: Flags,

    /// The response code.
    pub rcode: Rcode,
}

/// # Creation and Conversion
///
impl Header {
    /// Creates a new header.
    ///
    /// The new header has all fields as either zero or false. Thus, the
    /// opcode will be [`Opcode::QUERY`] and the response code will be
    /// [`Rcode::NOERROR`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a header from the ID and the second 16 bit word.
    pub fn from_flags_word(id: u16, word: u16) -> Self {
        Header {
            id,
            opcode: Opcode::from_int(((word >> 11) & 0x0F) as u8),
            flags: Flags {
                qr: word & (1 << 15) != 0,
                aa: word & (1 << 10) != 0,
                tc: word & (1 << 9) != 0,
                rd: word & (1 << 8) != 0,
                ra: word & (1 << 7) != 0,
            },
            rcode: Rcode::from_int((word & 0x0F) as u8),
        }
    }

    /// Returns the second 16 bit word of the header.
    ///
    /// The opcode and response code fields are four bits wide. If either
    /// value is larger than 15, fails with
    /// [`ComposeError::FieldOutOfRange`].
    pub fn to_flags_word(self) -> Result<u16, ComposeError> {
        let opcode = self.opcode.to_int();
        let rcode = self.rcode.to_int();
        if opcode > 0x0F || rcode > 0x0F {
            return Err(ComposeError::FieldOutOfRange);
        }
        let mut word = u16::from(opcode) << 11 | u16::from(rcode);
        if self.flags.qr {
            word |= 1 << 15
        }
        if self.flags.aa {
            word |= 1 << 10
        }
        if self.flags.tc {
            word |= 1 << 9
        }
        if self.flags.rd {
            word |= 1 << 8
        }
        if self.flags.ra {
            word |= 1 << 7
        }
        Ok(word)
    }
}

//--- Parse and Compose

impl<'a> Parse<'a> for Header {
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError> {
        let id = cursor.read_u16_be()?;
        let word = cursor.read_u16_be()?;
        Ok(Header::from_flags_word(id, word))
    }
}

impl Compose for Header {
    const COMPOSE_LEN: u16 = 4;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        let word = self.to_flags_word()?;
        self.id.compose(target)?;
        word.compose(target)
    }
}

//------------ Flags ---------------------------------------------------

/// The flags contained in the DNS message header.
///
/// This type has a text notation and can be created from it as well. Each
/// flags that is set is represented by a two-letter token, which is the
/// uppercase version of the flag name.  If mutliple flags are set, the tokens
/// are separated by space.
///
/// ```
/// use core::str::FromStr;
/// use domain_codec::base::header::Flags;
///
/// let flags = Flags::from_str("QR AA").unwrap();
/// assert!(flags.qr && flags.aa);
/// assert_eq!(format!("{}", flags), "QR AA");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// The `QR` bit specifies whether a message is a query (`false`) or a
    /// response (`true`). In other words, this bit is actually stating whether
    /// the message is *not* a query. So, perhaps it might be good to read ‘QR’
    /// as ‘query response.’
    pub qr: bool,

    /// Using the `AA` bit, a name server generating a response states whether
    /// it is authoritative for the requested domain name, ie., whether this
    /// response is an *authoritative answer.* The field has no meaning in a
    /// query.
    pub aa: bool,

    /// The *truncation* (`TC`) bit is set if there was more data available then
    /// fit into the message. This is typically used when employing datagram
    /// transports such as UDP to signal that the answer didn’t fit into a
    /// response and the query should be tried again using a stream transport
    /// such as TCP.
    pub tc: bool,

    /// The *recursion desired* (`RD`) bit may be set in a query to ask the name
    /// server to try and recursively gather a response if it doesn’t have the
    /// data available locally. The bit’s value is copied into the response.
    pub rd: bool,

    /// In a response, the *recursion available* (`RA`) bit denotes whether the
    /// responding name server supports recursion. It has no meaning in a query.
    pub ra: bool,
}

/// # Creation and Conversion
///
impl Flags {
    /// Creates new flags.
    ///
    /// All flags will be unset.
    pub fn new() -> Self {
        Self::default()
    }
}

//--- Display & FromStr

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for (set, token) in [
            (self.qr, "QR"),
            (self.aa, "AA"),
            (self.tc, "TC"),
            (self.rd, "RD"),
            (self.ra, "RA"),
        ] {
            if set {
                write!(f, "{}{}", sep, token)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = FlagsFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::new();
        for token in s.to_uppercase().split(' ') {
            match token {
                "QR" => flags.qr = true,
                "AA" => flags.aa = true,
                "TC" => flags.tc = true,
                "RD" => flags.rd = true,
                "RA" => flags.ra = true,
                "" => {}
                _ => return Err(FlagsFromStrError),
            }
        }
        Ok(flags)
    }
}

//------------ HeaderCounts -------------------------------------------------

/// The section count part of the header section of a DNS message.
///
/// This part consists of four 16 bit counters for the number of entries in
/// the four sections of a DNS message. The counters are arranged in the same
/// order as the sections themselves: QDCOUNT for the question section,
/// ANCOUNT for the answer section, NSCOUNT for the authority section, and
/// ARCOUNT for the additional section.
///
/// Values of this type are never stored. When parsing, the counts tell how
/// many entries to read. When composing, they are derived from the
/// sections via [`Message::counts`][crate::base::message::Message::counts].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderCounts {
    /// The value of the QDCOUNT field.
    pub qdcount: u16,

    /// The value of the ANCOUNT field.
    pub ancount: u16,

    /// The value of the NSCOUNT field.
    pub nscount: u16,

    /// The value of the ARCOUNT field.
    pub arcount: u16,
}

impl HeaderCounts {
    /// Creates a new value with all counters set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the counts from the lengths of the four sections.
    ///
    /// Returns [`ComposeError::SectionTooLarge`] if any of the lengths
    /// does not fit into 16 bits.
    pub fn from_lens(
        qd: usize,
        an: usize,
        ns: usize,
        ar: usize,
    ) -> Result<Self, ComposeError> {
        fn count(len: usize) -> Result<u16, ComposeError> {
            u16::try_from(len).map_err(|_| ComposeError::SectionTooLarge)
        }

        Ok(HeaderCounts {
            qdcount: count(qd)?,
            ancount: count(an)?,
            nscount: count(ns)?,
            arcount: count(ar)?,
        })
    }
}

//--- Parse and Compose

impl<'a> Parse<'a> for HeaderCounts {
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError> {
        Ok(HeaderCounts {
            qdcount: cursor.read_u16_be()?,
            ancount: cursor.read_u16_be()?,
            nscount: cursor.read_u16_be()?,
            arcount: cursor.read_u16_be()?,
        })
    }
}

impl Compose for HeaderCounts {
    const COMPOSE_LEN: u16 = 8;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.qdcount.compose(target)?;
        self.ancount.compose(target)?;
        self.nscount.compose(target)?;
        self.arcount.compose(target)
    }
}

//============ Error Types ===================================================

//------------ FlagsFromStrError --------------------------------------------

/// An error happened when converting string to flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlagsFromStrError;

impl fmt::Display for FlagsFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("illegal flags token")
    }
}

impl std::error::Error for FlagsFromStrError {}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flags_word() {
        let header = Header::from_flags_word(0x1234, 0x0100);
        assert_eq!(header.id, 0x1234);
        assert_eq!(header.opcode, Opcode::QUERY);
        assert_eq!(header.rcode, Rcode::NOERROR);
        assert_eq!(
            header.flags,
            Flags {
                rd: true,
                ..Default::default()
            }
        );

        let header = Header::from_flags_word(0, 0b1_0101_1111_000_0011);
        assert_eq!(header.opcode, Opcode::UPDATE);
        assert_eq!(header.rcode, Rcode::NXDOMAIN);
        assert_eq!(
            header.flags,
            Flags {
                qr: true,
                aa: true,
                tc: true,
                rd: true,
                ra: true,
            }
        );
        assert_eq!(header.to_flags_word(), Ok(0b1_0101_1111_000_0011));
    }

    #[test]
    fn reserved_bits_are_dropped() {
        let header = Header::from_flags_word(0, 0b0000_0000_0111_0000);
        assert_eq!(header, Header::new());
        assert_eq!(header.to_flags_word(), Ok(0));
    }

    #[test]
    fn wide_codes_are_rejected() {
        let header = Header {
            opcode: Opcode::from_int(15),
            rcode: Rcode::from_int(15),
            ..Default::default()
        };
        assert_eq!(header.to_flags_word(), Ok(0b0_1111_0000_000_1111));

        let header = Header {
            opcode: Opcode::from_int(0x12),
            ..Default::default()
        };
        assert_eq!(
            header.to_flags_word(),
            Err(ComposeError::FieldOutOfRange)
        );

        let header = Header {
            rcode: Rcode::from_int(0x1F),
            ..Default::default()
        };
        assert_eq!(
            header.to_flags_word(),
            Err(ComposeError::FieldOutOfRange)
        );
        let mut buf = Vec::new();
        assert_eq!(
            header.compose(&mut buf),
            Err(ComposeError::FieldOutOfRange)
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn each_flag_bit() {
        macro_rules! test_flag {
            ($flag:ident, $bit:expr) => {{
                let mut header = Header::new();
                header.flags.$flag = true;
                assert_eq!(header.to_flags_word(), Ok(1 << $bit));
                assert_eq!(Header::from_flags_word(0, 1 << $bit), header);
            }};
        }

        test_flag!(qr, 15);
        test_flag!(aa, 10);
        test_flag!(tc, 9);
        test_flag!(rd, 8);
        test_flag!(ra, 7);
    }

    #[test]
    fn parse_and_compose() {
        let mut cursor = Cursor::new(b"\x12\x34\x81\x80\0\x01\0\x02\0\x03\0\x04");
        let header = Header::parse(&mut cursor).unwrap();
        assert_eq!(header.id, 0x1234);
        assert!(header.flags.qr && header.flags.rd && header.flags.ra);
        let counts = HeaderCounts::parse(&mut cursor).unwrap();
        assert_eq!(
            counts,
            HeaderCounts {
                qdcount: 1,
                ancount: 2,
                nscount: 3,
                arcount: 4
            }
        );

        let mut buf = Vec::new();
        header.compose(&mut buf).unwrap();
        counts.compose(&mut buf).unwrap();
        assert_eq!(buf, b"\x12\x34\x81\x80\0\x01\0\x02\0\x03\0\x04");
    }

    #[test]
    fn short_header() {
        assert_eq!(
            Header::parse(&mut Cursor::new(b"\x12\x34\x01")),
            Err(ParseError::TruncatedInput)
        );
        assert_eq!(
            HeaderCounts::parse(&mut Cursor::new(b"\0\x01\0\x02\0\x03\0")),
            Err(ParseError::TruncatedInput)
        );
    }

    #[test]
    fn counts_from_lens() {
        assert_eq!(
            HeaderCounts::from_lens(1, 0, 0xFFFF, 2),
            Ok(HeaderCounts {
                qdcount: 1,
                ancount: 0,
                nscount: 0xFFFF,
                arcount: 2
            })
        );
        assert_eq!(
            HeaderCounts::from_lens(0, 0x10000, 0, 0),
            Err(ComposeError::SectionTooLarge)
        );
    }

    #[test]
    fn flags_display() {
        let f = Flags::new();
        assert_eq!(format!("{}", f), "");
        let f = Flags {
            qr: true,
            aa: true,
            tc: true,
            rd: true,
            ra: true,
        };
        assert_eq!(format!("{}", f), "QR AA TC RD RA");
        let mut f = Flags::new();
        f.rd = true;
        f.ra = true;
        assert_eq!(format!("{}", f), "RD RA");
    }

    #[test]
    fn flags_from_str() {
        let f1 = Flags::from_str("").unwrap();
        let f2 = Flags::new();
        assert_eq!(f1, f2);
        let f1 = Flags::from_str("QR AA TC RD RA").unwrap();
        let f2 = Flags {
            qr: true,
            aa: true,
            tc: true,
            rd: true,
            ra: true,
        };
        assert_eq!(f1, f2);
        let f1 = Flags::from_str("tC Aa rd").unwrap();
        let f2 = Flags {
            aa: true,
            tc: true,
            rd: true,
            ..Default::default()
        };
        assert_eq!(f1, f2);
        let f1 = Flags::from_str("XXXX");
        assert!(f1.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn flags_ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Flags {
                qr: true,
                rd: true,
                ..Default::default()
            },
            &[
                Token::Struct {
                    name: "Flags",
                    len: 5,
                },
                Token::Str("qr"),
                Token::Bool(true),
                Token::Str("aa"),
                Token::Bool(false),
                Token::Str("tc"),
                Token::Bool(false),
                Token::Str("rd"),
                Token::Bool(true),
                Token::Str("ra"),
                Token::Bool(false),
                Token::StructEnd,
            ],
        );
    }
}
