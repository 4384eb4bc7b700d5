//! Decoded DNS messages.
//!
//! This module defines the [`Message`] type which holds a DNS message
//! decoded into its header and its four sections. A message is created by
//! decoding its wire format via [`Message::decode`] or built up from
//! scratch, starting with [`Message::new`], [`Message::query`], or
//! [`Message::response_to`]. It is turned back into wire format via
//! [`Message::encode`] or, for any other octets builder, via
//! [`Message::compose`].
//!
//! The section counts of the header are not kept by a message. They are
//! derived from the lengths of the sections whenever the message is
//! encoded.

use super::config::ParseConfig;
use super::header::{Flags, Header, HeaderCounts};
use super::iana::Opcode;
use super::question::Question;
use super::record::Record;
use super::wire::{
    compose_or_rewind, Compose, ComposeError, Composer, Cursor, Parse,
    ParseError,
};
use core::fmt;
use std::io;
use tracing::{debug, trace};

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// The message owns all its questions and records. All fields are public
/// so that a message can be taken apart and assembled freely.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// The header without the section counts.
    pub header: Header,

    /// The question section.
    pub questions: Vec<Question>,

    /// The answer section.
    pub answers: Vec<Record>,

    /// The authority section.
    pub authority: Vec<Record>,

    /// The additional section.
    pub additional: Vec<Record>,
}

/// # Creation
///
impl Message {
    /// The size of the buffer used by [`read_from`][Self::read_from].
    ///
    /// This is the maximum size of a message sent over UDP without EDNS.
    pub const MAX_UDP_SIZE: usize = 512;

    /// Creates a new, empty message.
    ///
    /// All header fields are zero, so the message is a query with opcode
    /// QUERY. All sections are empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a standard query for a single question.
    ///
    /// The RD flag is set to ask for recursion.
    pub fn query(id: u16, question: Question) -> Self {
        Message {
            header: Header {
                id,
                opcode: Opcode::QUERY,
                flags: Flags {
                    rd: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            questions: vec![question],
            ..Default::default()
        }
    }

    /// Creates an empty response to the given query.
    ///
    /// The response copies the ID, opcode, RD flag, and question section
    /// from the query and has the QR flag set. The response code is
    /// NOERROR. All record sections are empty.
    pub fn response_to(query: &Message) -> Self {
        Message {
            header: Header {
                id: query.header.id,
                opcode: query.header.opcode,
                flags: Flags {
                    qr: true,
                    rd: query.header.flags.rd,
                    ..Default::default()
                },
                ..Default::default()
            },
            questions: query.questions.clone(),
            ..Default::default()
        }
    }
}

/// # Properties
///
impl Message {
    /// Returns the section counts for the message’s current content.
    ///
    /// Fails with [`ComposeError::SectionTooLarge`] if any section has more
    /// than 65535 entries.
    pub fn counts(&self) -> Result<HeaderCounts, ComposeError> {
        HeaderCounts::from_lens(
            self.questions.len(),
            self.answers.len(),
            self.authority.len(),
            self.additional.len(),
        )
    }

    /// Returns the first question if there is one.
    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns whether the message is a response to `query`.
    ///
    /// This is the case if the message has the QR flag set, the IDs match,
    /// and both have the same questions.
    pub fn is_answer(&self, query: &Message) -> bool {
        self.header.flags.qr
            && self.header.id == query.header.id
            && self.questions == query.questions
    }

    /// Returns an iterator over all records of the three record sections.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }
}

/// # Decoding
///
impl Message {
    /// Decodes a message from its wire format.
    ///
    /// Uses the default [`ParseConfig`].
    pub fn decode(packet: &[u8]) -> Result<Self, ParseError> {
        Self::decode_with_config(packet, &ParseConfig::default())
    }

    /// Decodes a message from its wire format using the given configuration.
    ///
    /// Exactly as many questions and records are read as the header says.
    /// Any octets following the last record are ignored. If anything is
    /// wrong with the message, the whole message is rejected.
    pub fn decode_with_config(
        packet: &[u8],
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        let res = Self::parse_with_config(&mut Cursor::new(packet), config);
        match res {
            Ok(ref msg) => {
                trace!(
                    id = msg.header.id,
                    len = packet.len(),
                    qdcount = msg.questions.len(),
                    ancount = msg.answers.len(),
                    nscount = msg.authority.len(),
                    arcount = msg.additional.len(),
                    "decoded message"
                );
            }
            Err(ref err) => {
                debug!(len = packet.len(), %err, "failed to decode message");
            }
        }
        res
    }

    /// Parses a message starting at the cursor’s position.
    ///
    /// Compression pointers are resolved relative to the start of the
    /// cursor’s packet, so the cursor should be positioned at the start.
    pub fn parse_with_config(
        cursor: &mut Cursor<'_>,
        config: &ParseConfig,
    ) -> Result<Self, ParseError> {
        let header = Header::parse(cursor)?;
        let counts = HeaderCounts::parse(cursor)?;
        Ok(Message {
            header,
            questions: parse_section(cursor, counts.qdcount, |cursor| {
                Question::parse_with_config(cursor, config)
            })?,
            answers: parse_section(cursor, counts.ancount, |cursor| {
                Record::parse_with_config(cursor, config)
            })?,
            authority: parse_section(cursor, counts.nscount, |cursor| {
                Record::parse_with_config(cursor, config)
            })?,
            additional: parse_section(cursor, counts.arcount, |cursor| {
                Record::parse_with_config(cursor, config)
            })?,
        })
    }

    /// Reads a single message from a reader.
    ///
    /// This does a single read of up to [`MAX_UDP_SIZE`][Self::MAX_UDP_SIZE]
    /// octets, which is what a datagram socket would deliver, and decodes
    /// whatever was read. A message that fails to decode results in an
    /// error of kind [`io::ErrorKind::InvalidData`].
    pub fn read_from(mut reader: impl io::Read) -> Result<Self, io::Error> {
        let mut buf = [0u8; Self::MAX_UDP_SIZE];
        let len = reader.read(&mut buf)?;
        Self::decode(&buf[..len])
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

/// Parses `count` items of a section.
fn parse_section<'a, T>(
    cursor: &mut Cursor<'a>,
    count: u16,
    mut op: impl FnMut(&mut Cursor<'a>) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    // Every item takes up at least one octet, so don’t let the count make
    // us allocate more than that.
    let mut res =
        Vec::with_capacity(usize::from(count).min(cursor.remaining()));
    for _ in 0..count {
        res.push(op(cursor)?);
    }
    Ok(res)
}

impl<'a> Parse<'a> for Message {
    fn parse(cursor: &mut Cursor<'a>) -> Result<Self, ParseError> {
        Self::parse_with_config(cursor, &ParseConfig::default())
    }
}

/// # Encoding
///
impl Message {
    /// Appends the wire format of the message to `target`.
    ///
    /// The section counts are taken from the sections. No name compression
    /// is used. If composing fails, `target` is truncated back to its
    /// previous length.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        let res = compose_or_rewind(target, |target| {
            let counts = self.counts()?;
            self.header.compose(target)?;
            counts.compose(target)?;
            for question in &self.questions {
                question.compose(target)?;
            }
            for record in self.records() {
                record.compose(target)?;
            }
            Ok(())
        });
        if let Err(ref err) = res {
            debug!(id = self.header.id, %err, "failed to encode message");
        }
        res
    }

    /// Returns the wire format of the message.
    pub fn encode(&self) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::with_capacity(self.compose_len());
        self.compose(&mut res)?;
        Ok(res)
    }

    /// Returns the wire format of the message as a bytes value.
    #[cfg(feature = "bytes")]
    pub fn encode_bytes(&self) -> Result<bytes::Bytes, ComposeError> {
        let mut res = bytes::BytesMut::with_capacity(self.compose_len());
        self.compose(&mut res)?;
        Ok(res.freeze())
    }

    /// Encodes the message and writes it to `writer`.
    ///
    /// A message that fails to encode results in an error of kind
    /// [`io::ErrorKind::InvalidInput`] and nothing is written.
    pub fn write_to(&self, mut writer: impl io::Write) -> Result<(), io::Error> {
        let octets = self
            .encode()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
        writer.write_all(&octets)
    }

    /// Returns the length of the message’s wire format.
    pub fn compose_len(&self) -> usize {
        usize::from(Header::COMPOSE_LEN)
            + usize::from(HeaderCounts::COMPOSE_LEN)
            + self
                .questions
                .iter()
                .map(Question::compose_len)
                .sum::<usize>()
            + self.records().map(Record::compose_len).sum::<usize>()
    }
}

//--- Display

impl fmt::Display for Message {
    /// Formats the message similar to the output of `dig`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, rcode: {}, id: {}",
            self.header.opcode, self.header.rcode, self.header.id
        )?;
        write!(f, ";; flags: {}", self.header.flags)?;
        writeln!(
            f,
            "; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            self.questions.len(),
            self.answers.len(),
            self.authority.len(),
            self.additional.len()
        )?;
        if !self.questions.is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for question in &self.questions {
                writeln!(f, ";{}", question)?;
            }
        }
        for (title, section) in [
            ("ANSWER", &self.answers),
            ("AUTHORITY", &self.authority),
            ("ADDITIONAL", &self.additional),
        ] {
            if !section.is_empty() {
                writeln!(f, "\n;; {} SECTION:", title)?;
                for record in section {
                    writeln!(f, "{}", record)?;
                }
            }
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rcode, Rtype};
    use crate::base::name::Name;
    use std::str::FromStr;

    fn example_question() -> Question {
        Question::new(
            Name::from_labels(["example", "com"]),
            Rtype::A,
            Class::IN,
        )
    }

    #[test]
    fn query() {
        let msg = Message::query(0x1234, example_question());
        assert_eq!(
            msg.encode().unwrap(),
            b"\x12\x34\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
              \x07example\x03com\x00\x00\x01\x00\x01"
        );
    }

    #[test]
    fn response_to() {
        let mut query = Message::query(7, example_question());
        query.header.opcode = Opcode::NOTIFY;
        let mut response = Message::response_to(&query);
        assert!(response.header.flags.qr);
        assert!(response.header.flags.rd);
        assert_eq!(response.header.opcode, Opcode::NOTIFY);
        assert_eq!(response.header.rcode, Rcode::NOERROR);
        assert_eq!(response.questions, query.questions);
        assert!(response.is_answer(&query));
        response.header.id = 8;
        assert!(!response.is_answer(&query));
        assert!(!query.is_answer(&query));
    }

    #[test]
    fn decode_sections() {
        let mut msg = Message::response_to(&Message::query(
            0xBEEF,
            example_question(),
        ));
        let record = Record::new(
            Name::from_labels(["example", "com"]),
            Rtype::A,
            Class::IN,
            300,
            vec![192, 0, 2, 1],
        );
        msg.answers.push(record.clone());
        msg.answers.push(record.clone());
        msg.authority.push(record.clone());
        msg.additional.push(record);

        let octets = msg.encode().unwrap();
        assert_eq!(&octets[4..12], b"\0\x01\0\x02\0\x01\0\x01");
        assert_eq!(octets.len(), msg.compose_len());
        assert_eq!(Message::decode(&octets), Ok(msg));
    }

    #[test]
    fn decode_compressed() {
        // A response with the answer’s owner pointing to the question name.
        let packet = b"\x12\x34\x81\x80\0\x01\0\x01\0\0\0\0\
                       \x07example\x03com\0\0\x01\0\x01\
                       \xc0\x0c\0\x01\0\x01\0\0\0\x3c\0\x04\xc0\0\x02\x01";
        let msg = Message::decode(packet).unwrap();
        assert_eq!(msg.answers.len(), 1);
        assert_eq!(msg.answers[0].owner(), example_question().qname());
        assert_eq!(msg.answers[0].ttl(), 60);

        // Re-encoding writes the name in full.
        let octets = msg.encode().unwrap();
        assert_eq!(octets.len(), packet.len() + 11);
        assert_eq!(Message::decode(&octets), Ok(msg));
    }

    #[test]
    fn decode_short() {
        let packet = Message::query(1, example_question()).encode().unwrap();
        for len in 0..packet.len() {
            assert_eq!(
                Message::decode(&packet[..len]),
                Err(ParseError::TruncatedInput),
                "length {}",
                len
            );
        }
    }

    #[test]
    fn trailing_octets_are_ignored() {
        let mut packet =
            Message::query(1, example_question()).encode().unwrap();
        packet.extend_from_slice(b"junk");
        assert_eq!(
            Message::decode(&packet),
            Ok(Message::query(1, example_question()))
        );
    }

    #[test]
    fn config_is_passed_on() {
        // The second question ends in a pointer to the first one. The
        // answer’s owner points to the second question and takes two hops.
        let packet = b"\0\0\x80\0\0\x02\0\x01\0\0\0\0\
                       \x03com\0\0\x01\0\x01\
                       \x07example\xc0\x0c\0\x01\0\x01\
                       \xc0\x15\0\x01\0\x01\0\0\0\0\0\0";
        assert!(Message::decode(packet).is_ok());
        let mut config = ParseConfig::new();
        config.set_max_pointer_hops(1);
        assert_eq!(
            Message::decode_with_config(packet, &config),
            Err(ParseError::CompressionLoopDetected)
        );
    }

    #[test]
    fn section_too_large() {
        let mut msg = Message::new();
        msg.questions = vec![example_question(); 0x10000];
        let mut buf = b"prefix".to_vec();
        assert_eq!(msg.compose(&mut buf), Err(ComposeError::SectionTooLarge));
        assert_eq!(buf, b"prefix");
        assert_eq!(msg.encode(), Err(ComposeError::SectionTooLarge));
    }

    #[test]
    fn compose_rewinds() {
        let mut msg = Message::query(1, example_question());
        msg.answers.push(Record::new(
            Name::from_labels([vec![b'x'; 64]]),
            Rtype::A,
            Class::IN,
            0,
            Vec::new(),
        ));
        let mut buf = b"prefix".to_vec();
        assert_eq!(msg.compose(&mut buf), Err(ComposeError::LabelTooLong));
        assert_eq!(buf, b"prefix");
    }

    #[test]
    fn wide_rcode_fails() {
        let mut msg = Message::query(1, example_question());
        msg.header.rcode = Rcode::from_int(16);
        let mut buf = b"prefix".to_vec();
        assert_eq!(msg.compose(&mut buf), Err(ComposeError::FieldOutOfRange));
        assert_eq!(buf, b"prefix");
        assert_eq!(msg.encode(), Err(ComposeError::FieldOutOfRange));
    }

    #[test]
    fn read_and_write() {
        let msg = Message::query(0x4321, example_question());
        let mut buf = Vec::new();
        msg.write_to(&mut buf).unwrap();
        assert_eq!(buf, msg.encode().unwrap());
        assert_eq!(Message::read_from(buf.as_slice()).unwrap(), msg);

        let err = Message::read_from(&buf[..5]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let mut bad = Message::new();
        bad.questions.push(Question::new_in(
            Name::from_labels([""]),
            Rtype::A,
        ));
        let mut buf = Vec::new();
        let err = bad.write_to(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(buf.is_empty());
    }

    #[test]
    fn display() {
        let msg = Message::query(
            5,
            Question::new_in(Name::from_str("example.com").unwrap(), Rtype::A),
        );
        assert_eq!(
            format!("{}", msg),
            ";; ->>HEADER<<- opcode: QUERY, rcode: NOERROR, id: 5\n\
             ;; flags: RD; QUERY: 1, ANSWER: 0, AUTHORITY: 0, ADDITIONAL: 0\n\
             \n\
             ;; QUESTION SECTION:\n\
             ;example.com.\tA\tIN\n"
        );
    }

    #[cfg(feature = "bytes")]
    #[test]
    fn encode_bytes() {
        let msg = Message::query(1, example_question());
        assert_eq!(
            msg.encode_bytes().unwrap().as_ref(),
            msg.encode().unwrap().as_slice()
        );
    }
}
