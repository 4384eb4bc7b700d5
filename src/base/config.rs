//! Limits applied while parsing messages.

use crate::utils::config::DefMinMax;

//------------ Configuration Constants ---------------------------------------

/// Limits for the number of compression pointers followed per name.
///
/// Since pointers can form cycles, this limit is what ends them. The upper
/// limit is the largest offset a pointer can express.
const MAX_POINTER_HOPS: DefMinMax<usize> = DefMinMax::new(128, 1, 0x3FFF);

//------------ ParseConfig ---------------------------------------------------

/// Configuration for parsing DNS messages.
#[derive(Clone, Copy, Debug)]
pub struct ParseConfig {
    /// How many compression pointers a single name may use.
    max_pointer_hops: usize,
}

impl ParseConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the maximum number of compression pointers per name.
    pub fn max_pointer_hops(&self) -> usize {
        self.max_pointer_hops
    }

    /// Sets the maximum number of compression pointers per name.
    ///
    /// The value is limited to the range from 1 to 16383. The default is
    /// 128.
    pub fn set_max_pointer_hops(&mut self, value: usize) {
        self.max_pointer_hops = MAX_POINTER_HOPS.limit(value)
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_pointer_hops: MAX_POINTER_HOPS.default(),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pointer_hops_are_limited() {
        let mut config = ParseConfig::new();
        assert_eq!(config.max_pointer_hops(), 128);
        config.set_max_pointer_hops(0);
        assert_eq!(config.max_pointer_hops(), 1);
        config.set_max_pointer_hops(1_000_000);
        assert_eq!(config.max_pointer_hops(), 0x3FFF);
        config.set_max_pointer_hops(4);
        assert_eq!(config.max_pointer_hops(), 4);
    }
}
