//! Filter predicate types for the query expression language.

/// Logical combinator joining the values of a group predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Every value must match.
    And,
    /// At least one value must match.
    Or,
}

impl Combinator {
    /// Returns the combinator as it appears in the query text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

/// A filter predicate bound to a single field.
///
/// Two shapes exist: a scalar equality (`rarity:vmax`) and a multi-value
/// group joined by a combinator (`types:"grass" OR types:"lightning"`).
///
/// # Example
///
/// ```
/// use pokemon_tcg::query::Predicate;
///
/// // Scalar equality, usually written through `Into`:
/// let rarity = Predicate::value("vmax");
///
/// // Multi-value groups:
/// let types = Predicate::or(["grass", "lightning"]);
/// let both = Predicate::and(["grass", "lightning"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Scalar equality on the field.
    Value(String),
    /// Multiple alternatives joined by a combinator.
    Group {
        /// How the values combine.
        combinator: Combinator,
        /// The values, in emission order.
        values: Vec<String>,
    },
}

impl Predicate {
    /// Creates a scalar equality predicate.
    pub fn value(value: impl Into<String>) -> Self {
        Predicate::Value(value.into())
    }

    /// Creates an AND group over the given values.
    pub fn and<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::Group {
            combinator: Combinator::And,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an OR group over the given values.
    pub fn or<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::Group {
            combinator: Combinator::Or,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&str> for Predicate {
    fn from(value: &str) -> Self {
        Predicate::Value(value.to_string())
    }
}

impl From<String> for Predicate {
    fn from(value: String) -> Self {
        Predicate::Value(value)
    }
}

impl From<&String> for Predicate {
    fn from(value: &String) -> Self {
        Predicate::Value(value.clone())
    }
}

macro_rules! predicate_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Predicate {
                fn from(value: $ty) -> Self {
                    Predicate::Value(value.to_string())
                }
            }
        )*
    };
}

predicate_from_int!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::{Combinator, Predicate};

    #[test]
    fn test_combinator_text() {
        assert_eq!(Combinator::And.as_str(), "AND");
        assert_eq!(Combinator::Or.as_str(), "OR");
    }

    #[test]
    fn test_group_value_order() {
        let p = Predicate::or(["grass", "lightning"]);
        assert_eq!(
            p,
            Predicate::Group {
                combinator: Combinator::Or,
                values: vec!["grass".to_string(), "lightning".to_string()],
            }
        );
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Predicate::from("vmax"), Predicate::value("vmax"));
        assert_eq!(Predicate::from(150u32), Predicate::value("150"));
    }
}
