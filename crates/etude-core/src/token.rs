use std::fmt;

use serde::{Deserialize, Serialize};

/// One element of a substituted sequence: either a surviving number or the
/// label that replaced it.
///
/// The untagged serde representation keeps the wire shape of a substituted
/// sequence as a plain mixed array:
///
/// ```
/// use etude_core::Token;
///
/// let tokens = vec![Token::Number(1), Token::Label("Fizz".into())];
/// let json = serde_json::to_string(&tokens).unwrap();
/// assert_eq!(json, r#"[1,"Fizz"]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// A number that no rule has matched.
    Number(i64),
    /// The label substituted for a number that met a divisibility rule.
    Label(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Label(label) => write!(f, "{}", label),
        }
    }
}

impl From<i64> for Token {
    fn from(value: i64) -> Self { Token::Number(value) }
}

impl From<&str> for Token {
    fn from(label: &str) -> Self { Token::Label(label.to_string()) }
}

impl From<String> for Token {
    fn from(label: String) -> Self { Token::Label(label) }
}
