//! Basics.
//!
//! This module provides the types for the wire format of DNS messages as
//! defined in [RFC 1035]. The types allow creating messages from scratch,
//! decoding them from their wire format, and encoding them again.
//!
//!
//! ## Parsing and Composing Messages
//!
//! In order to easily distinguish the process of creating and disecting
//! wire-format messages from other forms of representation conversion such
//! as reading from text, we use the term *parsing* for extracting data
//! from a wire-format representation and *composing* for producing such a
//! representation.
//!
//! Parsing happens on a buffer holding a complete DNS message. This is
//! necessary since domain names in a message may be compressed by
//! referencing other parts of the message. The [`Cursor`][wire::Cursor]
//! type walks over such a buffer and the [`Parse`][wire::Parse] trait is
//! implemented by all types that can be taken from it. Composing happens
//! into any type implementing octseq’s `OctetsBuilder` via the
//! [`Compose`][wire::Compose] trait. Names are never compressed when
//! composing.
//!
//! Unless you need to deal with parts of messages, the [`Message`] type
//! is the place to start. It has [`Message::decode`] and
//! [`Message::encode`] which take care of everything else.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data. Because they often
//! come with a number of support types, they are arranged in submodules:
//!
//! * [header] for the header of DNS messages,
//! * [iana] for the parameters defined in IANA registries,
//! * [name] for domain names,
//! * [question] for questions, and
//! * [record] for DNS resource records.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

//--- Re-exports

pub use self::config::ParseConfig;
pub use self::header::{Flags, Header, HeaderCounts};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::Message;
pub use self::name::{Label, Name};
pub use self::question::Question;
pub use self::record::Record;
pub use self::wire::{Compose, ComposeError, Cursor, Parse, ParseError};

//--- Modules

pub mod config;
pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;
