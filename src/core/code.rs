/// MEROPS classification codes and the category ordering used to sort them
use crate::{PepsumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// MEROPS catalytic types in report order
pub const MEROPS_CATEGORIES: [char; 9] = ['A', 'C', 'G', 'M', 'N', 'P', 'S', 'T', 'U'];

/// A hierarchical peptidase classification code such as `M`, `C1` or `S01A`.
///
/// The first character is the category, the first two characters the family
/// and the whole code the subfamily.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassificationCode(String);

impl ClassificationCode {
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(PepsumError::Parse(
                "classification code must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn category(&self) -> char {
        // Non-empty by construction
        self.0.chars().next().unwrap_or_default()
    }

    /// Two-character family, or `None` for a bare category code
    pub fn family(&self) -> Option<&str> {
        if self.0.chars().count() >= 2 {
            Some(char_prefix(&self.0, 2))
        } else {
            None
        }
    }

    /// Full code when it is at least three characters long
    pub fn subfamily(&self) -> Option<&str> {
        if self.0.chars().count() >= 3 {
            Some(&self.0)
        } else {
            None
        }
    }

    /// Label of the family this code rolls up into
    pub fn family_key(&self) -> &str {
        char_prefix(&self.0, 2)
    }

    /// `(category rank, family, subfamily)` with absent parts as empty strings
    pub fn sort_key<'a>(&'a self, order: &CategoryOrder) -> (usize, &'a str, &'a str) {
        (
            order.rank(self.category()),
            self.family().unwrap_or(""),
            self.subfamily().unwrap_or(""),
        )
    }
}

impl fmt::Display for ClassificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ClassificationCode {
    type Err = PepsumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ClassificationCode {
    type Error = PepsumError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ClassificationCode> for String {
    fn from(code: ClassificationCode) -> Self {
        code.0
    }
}

/// Fixed enumeration of categories; position defines report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    categories: Vec<char>,
}

impl CategoryOrder {
    pub fn new(categories: Vec<char>) -> Result<Self> {
        for (i, c) in categories.iter().enumerate() {
            if categories[..i].contains(c) {
                return Err(PepsumError::Config(format!(
                    "category '{}' listed more than once",
                    c
                )));
            }
        }
        Ok(Self { categories })
    }

    /// Position of `category` in the enumeration. Unknown categories rank
    /// after every listed one.
    pub fn rank(&self, category: char) -> usize {
        self.categories
            .iter()
            .position(|c| *c == category)
            .unwrap_or(self.categories.len())
    }

    pub fn contains(&self, category: char) -> bool {
        self.categories.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.categories.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self {
            categories: MEROPS_CATEGORIES.to_vec(),
        }
    }
}

/// First `n` characters of `s` (all of it when shorter)
pub(crate) fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("M", 'M', None, None; "category only")]
    #[test_case("C1", 'C', Some("C1"), None; "family")]
    #[test_case("S01A", 'S', Some("S0"), Some("S01A"); "subfamily")]
    #[test_case("A22", 'A', Some("A2"), Some("A22"); "three characters")]
    fn test_code_parts(raw: &str, category: char, family: Option<&str>, subfamily: Option<&str>) {
        let code = ClassificationCode::new(raw).unwrap();
        assert_eq!(code.category(), category);
        assert_eq!(code.family(), family);
        assert_eq!(code.subfamily(), subfamily);
    }

    #[test]
    fn test_empty_code_rejected() {
        assert!(ClassificationCode::new("").is_err());
        assert!(ClassificationCode::new("   ").is_err());
    }

    #[test]
    fn test_code_is_trimmed() {
        let code = ClassificationCode::new(" C14 ").unwrap();
        assert_eq!(code.as_str(), "C14");
    }

    #[test]
    fn test_family_key_for_short_code() {
        assert_eq!(ClassificationCode::new("G").unwrap().family_key(), "G");
        assert_eq!(ClassificationCode::new("G1").unwrap().family_key(), "G1");
        assert_eq!(ClassificationCode::new("G10").unwrap().family_key(), "G1");
    }

    #[test]
    fn test_rank_follows_enumeration() {
        let order = CategoryOrder::default();
        assert_eq!(order.rank('A'), 0);
        assert_eq!(order.rank('C'), 1);
        assert_eq!(order.rank('U'), 8);
        // Unknown categories sort last
        assert_eq!(order.rank('X'), 9);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let err = CategoryOrder::new(vec!['A', 'C', 'A']).unwrap_err();
        assert!(matches!(err, PepsumError::Config(_)));
    }

    #[test]
    fn test_sort_key_orders_category_before_family() {
        let order = CategoryOrder::default();
        let mut codes: Vec<ClassificationCode> = ["M10", "C1", "A1", "C", "M1", "C01A"]
            .iter()
            .map(|c| ClassificationCode::new(*c).unwrap())
            .collect();
        codes.sort_by(|a, b| a.sort_key(&order).cmp(&b.sort_key(&order)));
        let sorted: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(sorted, vec!["A1", "C", "C01A", "C1", "M1", "M10"]);
    }

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("S01A", 3), "S01");
        assert_eq!(char_prefix("S0", 3), "S0");
        assert_eq!(char_prefix("", 2), "");
    }
}
