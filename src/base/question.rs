//! A single question in a DNS message.
//!
//! This module defines the type `Question` which represents an entry in
//! the question section of a DNS message. The same triple of name, record
//! type, and class also starts every resource record.

use super::config::ParseConfig;
use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{Compose, ComposeError, Cursor, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. This type
/// represents such a question.
///
/// Record type and class are kept as whatever value was found in the
/// message. Unknown values are not rejected.
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the quesiton.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three componets.
    pub fn new(qname: Name, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: Name, qtype: Rtype) -> Self {
        Question::new(qname, qtype, Class::IN)
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> Name {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain nmae in the question,
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }

    /// Returns the length of the question’s wire format.
    pub fn compose_len(&self) -> usize {
        self.qname.compose_len()
            + usize::from(Rtype::COMPOSE_LEN)
            + usize::from(Class::COMPOSE_LEN)
    }
}

//--- From

impl From<(Name, Rtype, Class)> for Question {
    fn from((name, rtype, class): (Name, Rtype, Class)) -> Self {
        Question::new(name, rtype, class)
    }
}

impl From<(Name, Rtype)> for Question {
    fn from((name, rtype): (Name, Rtype)) -> Self {
        Question::new_in(name, rtype)
    }
}

//--- Parse and Compose

impl Question {
    /// Parses a question using the given configuration for its name.
    pub fn parse_with_config(
        cursor: &mut Cursor<'_>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        Ok(Question::new(
            Name::parse_with_config(cursor, config)?,
            Rtype::parse(cursor)?,
            Class::parse(cursor)?,
        ))
    }
}

impl<'a> Parse<'a> for Question {
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError> {
        Self::parse_with_config(cursor, &ParseConfig::default())
    }
}

impl Compose for Question {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.qname.compose(target)?;
        self.qtype.compose(target)?;
        self.qclass.compose(target)
    }
}

//--- Display and Debug

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.qname, self.qtype, self.qclass)
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Question")
            .field("qname", &self.qname)
            .field("qtype", &self.qtype)
            .field("qclass", &self.qclass)
            .finish()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    fn example() -> Question {
        Question::new_in(
            Name::from_labels(["example", "com"]),
            Rtype::A,
        )
    }

    #[test]
    fn compose() {
        let mut buf = Vec::new();
        example().compose(&mut buf).unwrap();
        assert_eq!(buf, b"\x07example\x03com\0\0\x01\0\x01");
        assert_eq!(example().compose_len(), buf.len());
    }

    #[test]
    fn parse() {
        let mut cursor =
            Cursor::new(b"\x07example\x03com\0\0\x01\0\x01more");
        assert_eq!(Question::parse(&mut cursor), Ok(example()));
        assert_eq!(cursor.remaining(), 4);
    }

    #[test]
    fn opaque_type_and_class() {
        let mut cursor = Cursor::new(b"\0\xff\xfe\x12\x34");
        let question = Question::parse(&mut cursor).unwrap();
        assert!(question.qname().is_root());
        assert_eq!(question.qtype(), Rtype::from_int(0xFFFE));
        assert_eq!(question.qclass(), Class::from_int(0x1234));

        let mut buf = Vec::new();
        question.compose(&mut buf).unwrap();
        assert_eq!(buf, b"\0\xff\xfe\x12\x34");
    }

    #[test]
    fn short_question() {
        assert_eq!(
            Question::parse(&mut Cursor::new(b"\x07example\x03com\0\0\x01\0")),
            Err(ParseError::TruncatedInput)
        );
        assert_eq!(
            Question::parse(&mut Cursor::new(b"\x07example\x03com\0")),
            Err(ParseError::TruncatedInput)
        );
    }

    #[test]
    fn display() {
        let question = Question::new(
            Name::from_str("example.com").unwrap(),
            Rtype::MX,
            Class::from_int(7),
        );
        assert_eq!(format!("{}", question), "example.com.\tMX\tCLASS7");
    }
}
