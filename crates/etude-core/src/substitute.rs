use crate::sequence::ascending;
use crate::token::Token;

/// A single divisibility rule: numbers exactly divisible by `divisor`
/// become `label`.
///
/// Rules are stateless and applied independently of each other; composing
/// them is [`Pipeline`]'s job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    divisor: i64,
    label: String,
}

impl Rule {
    /// Create a rule substituting `label` for multiples of `divisor`.
    pub fn new(divisor: i64, label: impl Into<String>) -> Self {
        Self {
            divisor,
            label: label.into(),
        }
    }

    /// Apply the rule to a sequence, substituting matching numbers and
    /// passing everything else through unchanged.
    ///
    /// Labels never match again, so applying the same rule twice is
    /// equivalent to applying it once. A zero divisor matches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use etude_core::{Rule, Token};
    ///
    /// let rule = Rule::new(15, "FizzBuzz");
    /// assert_eq!(rule.apply(&[Token::Number(15)]), vec![Token::from("FizzBuzz")]);
    /// assert_eq!(rule.apply(&[]), Vec::<Token>::new());
    /// ```
    pub fn apply(&self, tokens: &[Token]) -> Vec<Token> {
        tokens
            .iter()
            .map(|token| match token {
                Token::Number(value) if self.divisor != 0 && value % self.divisor == 0 => {
                    Token::Label(self.label.clone())
                }
                other => other.clone(),
            })
            .collect()
    }
}

/// An ordered list of [`Rule`]s folded over a sequence left-to-right.
///
/// Order is part of the semantics: a later rule may overwrite numbers an
/// earlier rule left alone, but an earlier rule's label can never be
/// re-matched. Classic FizzBuzz needs the 15-rule first for exactly this
/// reason.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    rules: Vec<Rule>,
}

impl Pipeline {
    /// Create a pipeline applying `rules` in the given order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Append a rule to the end of the pipeline.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Fold every rule over `tokens`, in declaration order.
    pub fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        self.rules
            .iter()
            .fold(tokens, |current, rule| rule.apply(&current))
    }
}

/// Classic FizzBuzz over `1..=n` as a substitution pipeline.
///
/// Non-positive `n` yields an empty sequence.
///
/// # Examples
///
/// ```
/// use etude_core::{Token, fizz_buzz};
///
/// let tokens = fizz_buzz(5);
/// assert_eq!(tokens[2], Token::from("Fizz"));
/// assert_eq!(tokens[4], Token::from("Buzz"));
/// assert!(fizz_buzz(-1).is_empty());
/// ```
pub fn fizz_buzz(n: i64) -> Vec<Token> {
    let pipeline = Pipeline::default()
        .rule(Rule::new(15, "FizzBuzz"))
        .rule(Rule::new(3, "Fizz"))
        .rule(Rule::new(5, "Buzz"));
    pipeline.apply(ascending(n).into_iter().map(Token::from).collect())
}

/// FizzBuzz over `1..=n` by zipping per-divisor label streams.
///
/// Each number is paired positionally with its "Fizz" and "Buzz" labels
/// (empty when the divisor does not divide it); the concatenated labels win,
/// and the number is rendered as a decimal string when both are empty. The
/// whole result is strings, unlike [`fizz_buzz`]'s mixed tokens.
pub fn fizz_buzz_zipped(n: i64) -> Vec<String> {
    let numbers = ascending(n);
    let fizz = labels_for(&numbers, 3, "Fizz");
    let buzz = labels_for(&numbers, 5, "Buzz");

    numbers
        .iter()
        .zip(fizz)
        .zip(buzz)
        .map(|((value, fizz), buzz)| {
            let label = format!("{fizz}{buzz}");
            if label.is_empty() { value.to_string() } else { label }
        })
        .collect()
}

fn labels_for(numbers: &[i64], divisor: i64, label: &str) -> Vec<String> {
    numbers
        .iter()
        .map(|value| {
            if value % divisor == 0 {
                label.to_string()
            } else {
                String::new()
            }
        })
        .collect()
}
