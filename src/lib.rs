//! A DNS message codec for Rust.
//!
//! This crate converts DNS messages between their wire format as defined
//! in [RFC 1035] and a plain in-memory representation. It covers the
//! message header, the question section, and the three record sections.
//! Record data is kept as opaque octets.
//!
//! Decoding resolves compressed domain names, rejecting compression
//! pointers that point outside the message or that could lead to a loop.
//! Encoding always writes names in full.
//!
//! ```
//! use core::str::FromStr;
//! use domain_codec::base::{Message, Name, Question, Rtype};
//!
//! let query = Message::query(
//!     0x1234,
//!     Question::new_in(Name::from_str("example.com").unwrap(), Rtype::A),
//! );
//! let octets = domain_codec::encode(&query).unwrap();
//! assert_eq!(&octets[..4], b"\x12\x34\x01\x00");
//! assert_eq!(domain_codec::decode(&octets).unwrap(), query);
//! ```
//!
//! # Modules
//!
//! * [base] contains the types for messages and their parts as well as
//!   the machinery for parsing and composing them, and
//! * [utils] contains small helpers used throughout the crate.
#![cfg_attr(feature = "logging", doc = "* [logging]:")]
#![cfg_attr(not(feature = "logging"), doc = "* logging:")]
//!   Setting up a tracing subscriber for tools and tests.
//!
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables encoding messages into the types `Bytes` and
//!   `BytesMut` from the [bytes](https://github.com/tokio-rs/bytes) crate.
//! * `logging`: Enables the
#![cfg_attr(feature = "logging", doc = "  [logging]")]
#![cfg_attr(not(feature = "logging"), doc = "  logging")]
//!   module which sets up the
//!   [tracing-subscriber](https://github.com/tokio-rs/tracing) crate.
//! * `serde`: Enables serde serialization for a number of basic types.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
#[cfg(feature = "logging")]
pub mod logging;
pub mod utils;

use crate::base::{ComposeError, Message, ParseError};

/// Decodes a message from its wire format.
///
/// This is a shortcut for [`Message::decode`].
pub fn decode(packet: &[u8]) -> Result<Message, ParseError> {
    Message::decode(packet)
}

/// Encodes a message into its wire format.
///
/// This is a shortcut for [`Message::encode`].
pub fn encode(message: &Message) -> Result<Vec<u8>, ComposeError> {
    message.encode()
}
