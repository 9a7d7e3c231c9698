use logos::Logos;

/// Pieces of program text. Parentheses, commas, the `|` operation separator
/// and whitespace only delimit tokens, so they are skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[\s,()|]+")]
enum Piece {
    #[regex(r"[^\s,()|]+")]
    Word,
}

/// Splits nested or linear program text into bare tokens.
///
/// `multiply(divide(n0, const_100), n1)` and `divide(n0,const_100)|multiply(#0,n1)|`
/// both reduce to flat token streams, which is the form the converter, the
/// validator and the interpreter consume.
///
/// # Example
/// ```
/// use mathqa::program::token::strip_to_tokens;
///
/// assert_eq!(strip_to_tokens("add(n0, const_1000)"), vec!["add", "n0", "const_1000"]);
/// assert_eq!(strip_to_tokens("add(n0,n1)|divide(#0,n2)|"),
///            vec!["add", "n0", "n1", "divide", "#0", "n2"]);
/// assert!(strip_to_tokens("  ").is_empty());
/// ```
#[must_use]
pub fn strip_to_tokens(source: &str) -> Vec<String> {
    let mut lexer = Piece::lexer(source);
    let mut tokens = Vec::new();

    while let Some(piece) = lexer.next() {
        if piece == Ok(Piece::Word) {
            tokens.push(lexer.slice().to_string());
        }
    }

    tokens
}

/// An argument token, classified by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    /// `n<digits>`: a variable bound to a numeral of the problem text. Holds
    /// the index.
    Placeholder(usize),
    /// `#<i>`: the result of an earlier operation. Holds the text after `#`,
    /// which may be malformed.
    BackReference(&'a str),
    /// `const_<name>`: holds the text after `const_`.
    Constant(&'a str),
    /// Anything else, expected to be a numeral.
    Literal(&'a str),
}

/// Prefix of named constants.
pub const CONSTANT_PREFIX: &str = "const_";

impl<'a> Argument<'a> {
    /// Classifies an argument token.
    ///
    /// # Example
    /// ```
    /// use mathqa::program::token::Argument;
    ///
    /// assert_eq!(Argument::classify("n3"), Argument::Placeholder(3));
    /// assert_eq!(Argument::classify("#0"), Argument::BackReference("0"));
    /// assert_eq!(Argument::classify("const_pi"), Argument::Constant("pi"));
    /// assert_eq!(Argument::classify("120"), Argument::Literal("120"));
    /// assert_eq!(Argument::classify("n"), Argument::Literal("n"));
    /// ```
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        if let Some(index) = placeholder_index(token) {
            return Self::Placeholder(index);
        }
        if let Some(rest) = token.strip_prefix('#') {
            return Self::BackReference(rest);
        }
        if let Some(rest) = token.strip_prefix(CONSTANT_PREFIX) {
            return Self::Constant(rest);
        }
        Self::Literal(token)
    }
}

/// Returns the index of an `n<digits>` placeholder.
#[must_use]
pub fn placeholder_index(token: &str) -> Option<usize> {
    token.strip_prefix('n')
         .filter(|rest| is_ascii_digits(rest))
         .and_then(|rest| rest.parse().ok())
}

/// The structural argument test used when no allowed-argument set is given:
/// `n<digits>` or `const_<digits>`.
///
/// # Example
/// ```
/// use mathqa::program::token::has_argument_shape;
///
/// assert!(has_argument_shape("n0"));
/// assert!(has_argument_shape("const_100"));
/// assert!(!has_argument_shape("const_pi"));
/// assert!(!has_argument_shape("#0"));
/// assert!(!has_argument_shape("n"));
/// ```
#[must_use]
pub fn has_argument_shape(token: &str) -> bool {
    if token.len() <= 1 {
        return false;
    }
    if let Some(rest) = token.strip_prefix(CONSTANT_PREFIX) {
        return is_ascii_digits(rest);
    }
    token.strip_prefix('n').is_some_and(is_ascii_digits)
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
