//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed.
    ///
    /// The opcode and its initial set of values are defined in [RFC 1035].
    /// Additional values have been defined over time. All currently assigned
    /// values can be found in the [IANA registry].
    ///
    /// The field is only four bits wide in the message header. Values above
    /// 15 can be created but a message holding one fails to encode.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-5
    =>
    Opcode, u8;

    /// A standard query (0).
    ///
    /// This query requests all records matching the name, class, and record
    /// type given in the query’s question section.
    (QUERY => 0, "QUERY")

    /// An inverse query (IQUERY) (1, obsolete).
    ///
    /// This value was defined in [RFC 1035] and obsoleted by [RFC 3425].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [RFC 3425]: https://tools.ietf.org/html/rfc3425
    (IQUERY => 1, "IQUERY")

    /// A server status request (2).
    (STATUS => 2, "STATUS")

    /// A NOTIFY query (4).
    ///
    /// This value and the NOTIFY query are defined in [RFC 1996].
    ///
    /// [RFC 1996]: https://tools.ietf.org/html/rfc1996
    (NOTIFY => 4, "NOTIFY")

    /// An UPDATE query (5).
    ///
    /// This value and the UPDATE query are defined in [RFC 2136].
    ///
    /// [RFC 2136]: https://tools.ietf.org/html/rfc2136
    (UPDATE => 5, "UPDATE")
}

int_enum_str_with_decimal!(Opcode, u8, "unknown opcode");

//--- Default

impl Default for Opcode {
    fn default() -> Self {
        Opcode::QUERY
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::Opcode;
    use core::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(Opcode::from_str("query"), Ok(Opcode::QUERY));
        assert_eq!(Opcode::from_str("NOTIFY"), Ok(Opcode::NOTIFY));
        assert_eq!(Opcode::from_str("9"), Ok(Opcode::from_int(9)));
        assert!(Opcode::from_str("BOGUS").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Opcode::UPDATE), "UPDATE");
        assert_eq!(format!("{}", Opcode::from_int(12)), "12");
        assert_eq!(format!("{:?}", Opcode::STATUS), "Opcode::STATUS");
    }
}
