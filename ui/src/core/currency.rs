//! Currency selection as read from a report's `<select>`.

use std::fmt;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Value of a currency dropdown: either "everything" or one ISO code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencySelection {
    All,
    Code(String),
}

impl CurrencySelection {
    /// Interpret a raw option value. The sentinel and an empty value both mean
    /// "no filter" (the server redirects `?ccy=` back to the bare path anyway).
    pub fn from_option(value: &str, sentinel: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == sentinel {
            Self::All
        } else {
            Self::Code(value.to_string())
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Code(code) => Some(code.as_str()),
        }
    }

    /// `ccy=<code>` for a filtered selection.
    pub fn query_pair(&self) -> Option<String> {
        self.code()
            .map(|code| format!("ccy={}", utf8_percent_encode(code, NON_ALPHANUMERIC)))
    }
}

impl fmt::Display for CurrencySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all currencies"),
            Self::Code(code) => f.write_str(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_blank_mean_all() {
        assert_eq!(CurrencySelection::from_option("#", "#"), CurrencySelection::All);
        assert_eq!(CurrencySelection::from_option("", "#"), CurrencySelection::All);
        assert_eq!(CurrencySelection::from_option("  ", "#"), CurrencySelection::All);
    }

    #[test]
    fn codes_are_kept_verbatim() {
        let sel = CurrencySelection::from_option("HKD", "#");
        assert_eq!(sel.code(), Some("HKD"));
        assert_eq!(sel.query_pair().as_deref(), Some("ccy=HKD"));
    }

    #[test]
    fn sentinel_never_reaches_the_query() {
        assert_eq!(CurrencySelection::All.query_pair(), None);
    }

    #[test]
    fn odd_values_are_encoded() {
        let sel = CurrencySelection::from_option("A&B", "#");
        assert_eq!(sel.query_pair().as_deref(), Some("ccy=A%26B"));
    }
}
