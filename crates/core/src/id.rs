//! Strongly-typed item identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an item.
///
/// Always assigned by the store; callers never mint one for a new item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The first identifier a fresh store hands out.
    pub const FIRST: ItemId = ItemId(1);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one.
    ///
    /// Panics once the id space is exhausted rather than wrapping, which would
    /// hand out ids that were already issued.
    pub fn next(self) -> Self {
        match self.0.checked_add(1) {
            Some(raw) => Self(raw),
            None => panic!("item id space exhausted"),
        }
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = u64::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_path_segment() {
        let id: ItemId = "17".parse().unwrap();
        assert_eq!(id.get(), 17);
    }

    #[test]
    fn rejects_non_integer() {
        let err = "abc".parse::<ItemId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert!("-1".parse::<ItemId>().is_err());
        assert!("1.5".parse::<ItemId>().is_err());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn next_is_strictly_greater() {
        assert!(ItemId::FIRST.next() > ItemId::FIRST);
        assert_eq!(ItemId::FIRST.get(), 1);
    }

    #[test]
    #[should_panic(expected = "item id space exhausted")]
    fn next_never_wraps() {
        let _ = ItemId::new(u64::MAX).next();
    }
}
