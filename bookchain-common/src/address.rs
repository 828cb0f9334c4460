use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A wallet address as handed out by the provider or listed as a book author.
///
/// Identity is case-insensitive: two addresses are equal when their ASCII
/// lowercased forms match exactly. Nothing is trimmed or checksum-validated, so
/// `" 0xabc"` and `"0xabc"` are different addresses. The original text is kept
/// for display.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical lowercase form used for comparisons. Only ASCII letters fold.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Abbreviated form for compact display, e.g. `0x1234...7890`.
    pub fn short(&self) -> String {
        if self.0.is_ascii() && self.0.len() > 10 {
            format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 4..])
        } else {
            self.0.clone()
        }
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Address {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_letter_case() {
        let checksummed = Address::new("0xAbCdEf0123456789AbCdEf0123456789aBcDeF01");
        let lower = Address::new("0xabcdef0123456789abcdef0123456789abcdef01");
        let upper = Address::new("0XABCDEF0123456789ABCDEF0123456789ABCDEF01");

        assert_eq!(checksummed, lower);
        assert_eq!(lower, checksummed);
        assert_eq!(upper, lower);
    }

    #[test]
    fn only_ascii_letters_are_folded() {
        assert_eq!(Address::new("0xÄB").normalized(), "0xÄb");
        assert_ne!(Address::new("0xÄ"), Address::new("0xä"));
    }

    #[test]
    fn equality_does_not_trim_whitespace() {
        let padded = Address::new(" 0xabc");
        let plain = Address::new("0xabc");
        assert_ne!(padded, plain);
        assert_ne!(Address::new("0xabc "), plain);
    }

    #[test]
    fn hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Address::new("0xABC"));
        assert!(set.contains(&Address::new("0xabc")));
        assert!(!set.insert(Address::new("0xAbC")));
    }

    #[test]
    fn display_keeps_original_text() {
        let addr = Address::new("0xAbC");
        assert_eq!(addr.to_string(), "0xAbC");
        assert_eq!(addr.normalized(), "0xabc");
    }

    #[test]
    fn short_form_abbreviates_long_addresses() {
        let addr = Address::new("0x1234567890123456789012345678901234567890");
        assert_eq!(addr.short(), "0x1234...7890");
        assert_eq!(Address::new("0x1234").short(), "0x1234");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let addr: Address = serde_json::from_str("\"0xABC\"").unwrap();
        assert_eq!(addr, Address::new("0xabc"));
        assert_eq!(addr.as_str(), "0xABC");
    }
}
