//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. Normal query includes the
    /// type of record information is requested for.
    ///
    /// Messages carry record data as opaque octets, so every 16 bit value is
    /// acceptable here. Only a few common types have a name. All others are
    /// shown and parsed in the `TYPE` notation of [RFC 3597].
    ///
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    ///
    /// See [RFC 3596].
    ///
    /// [RFC 3596]: https://tools.ietf.org/html/rfc3596
    (AAAA => 28, "AAAA")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16, "unknown record type");

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::Rtype;
    use core::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(Rtype::from_str("aaaa"), Ok(Rtype::AAAA));
        assert_eq!(Rtype::from_str("TYPE99"), Ok(Rtype::from_int(99)));
        assert_eq!(Rtype::from_str("type1"), Ok(Rtype::A));
        assert!(Rtype::from_str("TYPE").is_err());
        assert!(Rtype::from_str("99").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rtype::MX), "MX");
        assert_eq!(format!("{}", Rtype::from_int(65280)), "TYPE65280");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(&Rtype::AAAA, &[Token::U16(28)]);
        assert_tokens(&Rtype::from_int(65280), &[Token::U16(65280)]);
    }
}
