//! DNS response codes.

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS Response Codes.
    ///
    /// The response code of a response indicates what happend on the server
    /// when trying to answer the query. The code is a 4 bit value and part
    /// of the header of a DNS message.
    ///
    /// Extended response codes carried in the OPT record are not covered by
    /// this type. As with [`Opcode`][super::Opcode], a value above 15 can be
    /// created but cannot be written to the header.
    ///
    /// See [RFC 1035] for the initial set of values.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Rcode, u8;

    /// No error condition.
    ///
    /// (Otherwise known as success.)
    (NOERROR => 0, "NOERROR")

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    ///
    /// The name server was unable to process this query due to a problem
    /// with the name server.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    ///
    /// The domain name given in the query does not exist at the name server.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    ///
    /// The name server refused to perform the operation requested by the
    /// query for policy reasons.
    (REFUSED => 5, "REFUSED")
}

int_enum_str_with_decimal!(Rcode, u8, "unknown rcode");

//--- Default

impl Default for Rcode {
    fn default() -> Self {
        Rcode::NOERROR
    }
}

//============ Testing =======================================================
