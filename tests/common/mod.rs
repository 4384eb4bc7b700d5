//! Helpers shared by the integration tests.

use domain_codec::base::{Class, Message, Name, Question, Record, Rtype};
use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by domain-codec and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults, e.g.,
/// RUST_LOG=TRACE to see every compression pointer followed.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Creates a name from a dotted string.
pub fn name(s: &str) -> Name {
    s.parse().unwrap()
}

/// Creates an A record for `owner` with the given address.
pub fn a_record(owner: &str, ttl: u32, addr: [u8; 4]) -> Record {
    Record::new(name(owner), Rtype::A, Class::IN, ttl, addr.to_vec())
}

/// Creates a response to an A query for example.com with one record in
/// each section.
pub fn full_response() -> Message {
    let query =
        Message::query(0xCAFE, Question::new_in(name("example.com"), Rtype::A));
    let mut msg = Message::response_to(&query);
    msg.header.flags.aa = true;
    msg.header.flags.ra = true;
    msg.answers.push(a_record("example.com", 3600, [192, 0, 2, 1]));
    msg.authority.push(Record::new(
        name("example.com"),
        Rtype::NS,
        Class::IN,
        86400,
        b"\x02ns\x07example\x03com\0".to_vec(),
    ));
    msg.additional.push(a_record("ns.example.com", 86400, [192, 0, 2, 53]));
    msg
}
