//! Domain names.
//!
//! Domain names are a sequence of *labels* which are in turn a sequence of
//! up to 63 octets. While they are limited to a subset of ASCII by
//! convention, all octet values are allowed. In their wire-format
//! representation labels are prefixed with an octet containing the the number
//! of octets in the label. The labels in a domain name are nominally arranged
//! backwards. That is, the ‘most significant’ label is the last one. This
//! last label is an empty label, called the *root label* and indicating the
//! root of the domain name tree.
//!
//! In order to save space in DNS messages (which were originally limited to
//! 512 bytes for most cases), a name can end in a pointer to another name
//! stored elsewhere in the message. The [`Name`] type resolves such pointers
//! when it is parsed and always keeps all labels itself. When composed, the
//! name is always written in full without any compression.
//!
//! Because a pointer can point anywhere in the message, a broken or
//! malicious message could make a naive parser go around in circles. The
//! parser here only follows pointers that point to a position before
//! themselves and gives up after a configurable number of them. See
//! [`Name::parse_with_config`] for details.

pub use self::dname::{FromStrError, Name};
pub use self::label::Label;

mod dname;
mod label;
mod parsed;
