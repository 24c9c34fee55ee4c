//! Operator and logic vocabulary.
//!
//! Both tables are bidirectional: every symbol maps to exactly one variant,
//! and every variant prints back as one canonical symbol.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::parser::ParseError;

/// Comparison operator of a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    /// `=`
    Equals,
    /// `!=`
    NotEquals,
    /// `<`
    LessThan,
    /// `<=` (also written `=<`)
    LessThanEqual,
    /// `>`
    GreaterThan,
    /// `>=` (also written `=>`)
    GreaterThanEqual,
    /// `=~`
    Like,
    /// `!=~`
    NotLike,
    /// `=~~`
    ILike,
    /// `!=~~`
    NotILike,
    /// `:`
    Regexp,
    /// `!:`
    NotRegexp,
    /// `:~`
    IRegexp,
    /// `!:~`
    NotIRegexp,
}

impl FilterOp {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Equals,
        Self::NotEquals,
        Self::LessThan,
        Self::LessThanEqual,
        Self::GreaterThan,
        Self::GreaterThanEqual,
        Self::Like,
        Self::NotLike,
        Self::ILike,
        Self::NotILike,
        Self::Regexp,
        Self::NotRegexp,
        Self::IRegexp,
        Self::NotIRegexp,
    ];

    /// Every accepted spelling, longest first. A symbol that is a prefix of
    /// another always comes after it, which is the order the scanner needs.
    pub const SYMBOLS: [&'static str; 16] = [
        "!=~~", "=~~", "!=~", "!:~", "=~", "!:", ":~", "<=", "=<", ">=", "=>", "!=", ":", "<",
        ">", "=",
    ];

    /// Looks up an operator by any of its spellings.
    #[must_use]
    pub fn from_symbol(sym: &str) -> Option<Self> {
        match sym {
            "=" => Some(Self::Equals),
            "!=" => Some(Self::NotEquals),
            "<" => Some(Self::LessThan),
            "<=" | "=<" => Some(Self::LessThanEqual),
            ">" => Some(Self::GreaterThan),
            ">=" | "=>" => Some(Self::GreaterThanEqual),
            "=~" => Some(Self::Like),
            "!=~" => Some(Self::NotLike),
            "=~~" => Some(Self::ILike),
            "!=~~" => Some(Self::NotILike),
            ":" => Some(Self::Regexp),
            "!:" => Some(Self::NotRegexp),
            ":~" => Some(Self::IRegexp),
            "!:~" => Some(Self::NotIRegexp),
            _ => None,
        }
    }

    /// Returns the canonical symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::Like => "=~",
            Self::NotLike => "!=~",
            Self::ILike => "=~~",
            Self::NotILike => "!=~~",
            Self::Regexp => ":",
            Self::NotRegexp => "!:",
            Self::IRegexp => ":~",
            Self::NotIRegexp => "!:~",
        }
    }

    /// Returns true for `=` and `!=`.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equals | Self::NotEquals)
    }

    /// Returns true for the six ordering and equality comparisons.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Equals
                | Self::NotEquals
                | Self::LessThan
                | Self::LessThanEqual
                | Self::GreaterThan
                | Self::GreaterThanEqual
        )
    }

    /// Returns true for the pattern-matching operators (LIKE and regex).
    #[must_use]
    pub const fn is_pattern(self) -> bool {
        !self.is_comparison()
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for FilterOp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| ParseError::InvalidOperator(s.to_string()))
    }
}

impl Serialize for FilterOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for FilterOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let sym = String::deserialize(deserializer)?;
        Self::from_symbol(&sym)
            .ok_or_else(|| de::Error::custom(format!("unknown filter operator: {sym}")))
    }
}

/// Boolean combinator joining a term to its predecessor in the same group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterLogic {
    /// First term of a group; no combinator.
    #[default]
    Start,
    /// `&`
    And,
    /// `|`
    Or,
}

impl FilterLogic {
    /// Looks up a combinator by its symbol. `Start` has no symbol.
    #[must_use]
    pub fn from_symbol(sym: &str) -> Option<Self> {
        match sym {
            "&" => Some(Self::And),
            "|" => Some(Self::Or),
            _ => None,
        }
    }

    /// Returns the query-string symbol, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Start => None,
            Self::And => Some("&"),
            Self::Or => Some("|"),
        }
    }

    /// Returns the serialized name (`START`, `AND`, `OR`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for FilterLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FilterLogic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FilterLogic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        match name.as_str() {
            "START" => Ok(Self::Start),
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(de::Error::custom(format!("unknown filter logic: {name}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_resolves() {
        for sym in FilterOp::SYMBOLS {
            assert!(FilterOp::from_symbol(sym).is_some(), "symbol: {sym}");
        }
        assert_eq!(FilterOp::from_symbol("=="), None);
        assert_eq!(FilterOp::from_symbol(""), None);
    }

    #[test]
    fn test_canonical_symbol_round_trips() {
        for op in FilterOp::ALL {
            assert_eq!(FilterOp::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_alternate_spellings_canonicalize() {
        assert_eq!(FilterOp::from_symbol("=<"), Some(FilterOp::LessThanEqual));
        assert_eq!(FilterOp::from_symbol("=>"), Some(FilterOp::GreaterThanEqual));
        assert_eq!(FilterOp::LessThanEqual.to_string(), "<=");
        assert_eq!(FilterOp::GreaterThanEqual.to_string(), ">=");
    }

    #[test]
    fn test_symbols_are_prefix_ordered() {
        for (i, earlier) in FilterOp::SYMBOLS.iter().enumerate() {
            for later in &FilterOp::SYMBOLS[i + 1..] {
                assert!(
                    !later.starts_with(earlier) || later == earlier,
                    "{later} must come before {earlier}"
                );
            }
        }
    }

    #[test]
    fn test_from_str_error() {
        assert_eq!(
            "~~".parse::<FilterOp>(),
            Err(ParseError::InvalidOperator("~~".to_string()))
        );
    }

    #[test]
    fn test_operator_classes() {
        let comparisons: Vec<FilterOp> =
            FilterOp::ALL.into_iter().filter(|op| op.is_comparison()).collect();
        assert_eq!(comparisons.len(), 6);
        assert!(FilterOp::NotEquals.is_equality());
        assert!(!FilterOp::LessThan.is_equality());
        assert!(FilterOp::NotIRegexp.is_pattern());
    }

    #[test]
    fn test_logic_symbols() {
        assert_eq!(FilterLogic::from_symbol("&"), Some(FilterLogic::And));
        assert_eq!(FilterLogic::from_symbol("|"), Some(FilterLogic::Or));
        assert_eq!(FilterLogic::from_symbol(""), None);
        assert_eq!(FilterLogic::Start.symbol(), None);
        assert_eq!(FilterLogic::Or.to_string(), "OR");
    }

    #[test]
    fn test_serde_uses_symbols() {
        assert_eq!(
            serde_json::to_string(&FilterOp::NotILike).unwrap(),
            "\"!=~~\""
        );
        let op: FilterOp = serde_json::from_str("\"=>\"").unwrap();
        assert_eq!(op, FilterOp::GreaterThanEqual);
        let logic: FilterLogic = serde_json::from_str("\"AND\"").unwrap();
        assert_eq!(logic, FilterLogic::And);
        assert!(serde_json::from_str::<FilterLogic>("\"XOR\"").is_err());
    }
}
