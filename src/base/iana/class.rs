//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for different
    /// network types. That is, each class has its own separate record tree
    /// starting at the root. However, in practice, only the IN class is really
    /// relevant.
    ///
    /// Classes are represented by a 16 bit value. Any value is accepted.
    =>
    Class, u16;

    /// Internet (IN).
    ///
    /// This class is defined in RFC 1035 and really the only one relevant
    /// at all.
    (IN => 1, "IN")

    /// Chaosnet (CH).
    ///
    /// A network protocol developed at MIT in the 1970s. Reused by BIND for
    /// built-in server information zones.
    (CH => 3, "CH")

    /// Hesiod (HS).
    ///
    /// A system information protocol part of MIT's Project Athena.
    (HS => 4, "HS")

    /// Query class ANY.
    ///
    /// This class can be used in a query to indicate that records for the
    /// given name from any class are requested.
    (ANY => 0xFF, "ANY")
}

int_enum_str_with_prefix!(Class, "CLASS", u16, "unknown class");

//============ Testing =======================================================
