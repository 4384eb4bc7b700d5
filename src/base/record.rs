//! Resource Records.
//!
//! This module defines the type [`Record`] for the entries of the answer,
//! authority, and additional sections of a DNS message.

use super::config::ParseConfig;
use super::iana::{Class, Rtype};
use super::name::Name;
use super::question::Question;
use super::wire::{
    append_slice, Compose, ComposeError, Cursor, Parse, ParseError,
};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// All information available through the DNS is stored in resource records.
/// They have a three part key of a domain name, resource record type, and
/// class. The domain name is called the *owner* of the record. Since the
/// key has the same shape and wire format as a question, it is kept as a
/// [`Question`].
///
/// There is one more piece of data: the TTL or time to live. This value
/// says how long a record remains valid before it should be refreshed from
/// its original source, in seconds.
///
/// The payload of a resource record is its data. Its format is determined
/// by the record type. This type keeps the data as the raw octets found in
/// the message and never looks inside. In particular, any domain names in
/// the data stay as they were, compression pointers included.
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// The owner, record type, and class of the record.
    key: Question,

    /// The number of seconds the record may be cached.
    ttl: u32,

    /// The raw record data.
    data: Vec<u8>,
}

/// # Creation and Conversion
///
impl Record {
    /// Creates a new record from its parts.
    pub fn new(
        owner: Name,
        rtype: Rtype,
        class: Class,
        ttl: u32,
        data: Vec<u8>,
    ) -> Self {
        Record::from_key(Question::new(owner, rtype, class), ttl, data)
    }

    /// Creates a new record from its key, TTL, and data.
    pub fn from_key(key: Question, ttl: u32, data: Vec<u8>) -> Self {
        Record { key, ttl, data }
    }

    /// Converts the record into its key and data.
    pub fn into_key_and_data(self) -> (Question, Vec<u8>) {
        (self.key, self.data)
    }
}

/// # Field Access
///
impl Record {
    /// Returns the key of the record.
    pub fn key(&self) -> &Question {
        &self.key
    }

    /// Returns a reference to the owner domain name.
    pub fn owner(&self) -> &Name {
        self.key.qname()
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.key.qtype()
    }

    /// Returns the record’s class.
    pub fn class(&self) -> Class {
        self.key.qclass()
    }

    /// Returns the record’s time-to-live.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Sets the record’s time-to-live.
    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the record data.
    pub fn data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }

    /// Trades the record for its raw data.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the length of the record’s wire format.
    pub fn compose_len(&self) -> usize {
        self.key.compose_len()
            + usize::from(u32::COMPOSE_LEN)
            + usize::from(u16::COMPOSE_LEN)
            + self.data.len()
    }
}

//--- From

impl From<(Name, Rtype, Class, u32, Vec<u8>)> for Record {
    fn from(
        (owner, rtype, class, ttl, data): (Name, Rtype, Class, u32, Vec<u8>),
    ) -> Self {
        Record::new(owner, rtype, class, ttl, data)
    }
}

//--- Parse and Compose

impl Record {
    /// Parses a record using the given configuration for its owner.
    ///
    /// Takes exactly as many octets of data as the record’s RDLENGTH field
    /// states. If fewer are left, fails with
    /// [`ParseError::TruncatedInput`].
    pub fn parse_with_config(
        cursor: &mut Cursor<'_>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        let key = Question::parse_with_config(cursor, config)?;
        let ttl = cursor.read_u32_be()?;
        let rdlen = cursor.read_u16_be()?;
        let data = cursor.read_bytes(rdlen.into())?;
        Ok(Record::from_key(key, ttl, data.into()))
    }
}

impl<'a> Parse<'a> for Record {
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError> {
        Self::parse_with_config(cursor, &ParseConfig::default())
    }
}

impl Compose for Record {
    /// Appends the wire format of the record.
    ///
    /// Fails with [`ComposeError::RdataTooLong`] if the data does not fit
    /// into the 16 bit length field.
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        let rdlen = u16::try_from(self.data.len())
            .map_err(|_| ComposeError::RdataTooLong)?;
        self.key.compose(target)?;
        self.ttl.compose(target)?;
        rdlen.compose(target)?;
        append_slice(target, &self.data)
    }
}

//--- Display and Debug

impl fmt::Display for Record {
    /// Formats the record in zonefile notation.
    ///
    /// The data is always written in the generic notation of [RFC 3597].
    ///
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t\\# {}",
            self.owner(),
            self.ttl,
            self.class(),
            self.rtype(),
            self.data.len()
        )?;
        if !self.data.is_empty() {
            f.write_str(" ")?;
            for ch in &self.data {
                write!(f, "{:02x}", ch)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Record")
            .field("owner", self.owner())
            .field("rtype", &self.rtype())
            .field("class", &self.class())
            .field("ttl", &self.ttl)
            .field("data", &self.data)
            .finish()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    const WIRE: &[u8] = b"\x07example\x03com\0\0\x01\0\x01\
                          \0\0\x0e\x10\0\x04\xc0\0\x02\x01";

    fn example() -> Record {
        Record::new(
            Name::from_labels(["example", "com"]),
            Rtype::A,
            Class::IN,
            3600,
            vec![192, 0, 2, 1],
        )
    }

    #[test]
    fn compose() {
        let mut buf = Vec::new();
        example().compose(&mut buf).unwrap();
        assert_eq!(buf, WIRE);
        assert_eq!(example().compose_len(), WIRE.len());
    }

    #[test]
    fn parse() {
        let mut cursor = Cursor::new(WIRE);
        let record = Record::parse(&mut cursor).unwrap();
        assert_eq!(record, example());
        assert_eq!(record.owner(), &Name::from_labels(["example", "com"]));
        assert_eq!(record.ttl(), 3600);
        assert_eq!(record.data(), b"\xc0\0\x02\x01");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn empty_data() {
        let record = Record::new(
            Name::root(),
            Rtype::from_int(99),
            Class::ANY,
            0,
            Vec::new(),
        );
        let mut buf = Vec::new();
        record.compose(&mut buf).unwrap();
        assert_eq!(buf, b"\0\0\x63\0\xff\0\0\0\0\0\0");
        assert_eq!(Record::parse(&mut Cursor::new(&buf)), Ok(record));
    }

    #[test]
    fn short_data() {
        assert_eq!(
            Record::parse(&mut Cursor::new(&WIRE[..WIRE.len() - 1])),
            Err(ParseError::TruncatedInput)
        );
        // TTL cut short.
        assert_eq!(
            Record::parse(&mut Cursor::new(&WIRE[..19])),
            Err(ParseError::TruncatedInput)
        );
    }

    #[test]
    fn data_too_long() {
        let record = Record::new(
            Name::root(),
            Rtype::TXT,
            Class::IN,
            0,
            vec![0; 0x10000],
        );
        let mut buf = Vec::new();
        assert_eq!(record.compose(&mut buf), Err(ComposeError::RdataTooLong));
        assert!(buf.is_empty());

        let record = Record::new(
            Name::root(),
            Rtype::TXT,
            Class::IN,
            0,
            vec![0; 0xFFFF],
        );
        assert_eq!(record.compose(&mut buf), Ok(()));
        assert_eq!(buf.len(), 11 + 0xFFFF);
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", example()),
            "example.com.\t3600\tIN\tA\t\\# 4 c0000201"
        );
    }
}
