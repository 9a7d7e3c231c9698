use logos::Logos;

/// Scanner for the numeral grammar shared by constant parsing and option
/// parsing: an optional leading minus, digits, then optionally a decimal point
/// followed by more digits.
///
/// Everything that is not part of a numeral is skipped, so scanning free text
/// yields the leftmost non-overlapping numerals in order.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Scan {
    /// `12`, `-3`, `4.25`, `7.`
    #[regex(r"-?[0-9]+(\.[0-9]*)?")]
    Numeral,
    /// Any run of characters that cannot start a numeral.
    #[regex(r"[^0-9\-]+", logos::skip)]
    Text,
    /// A minus sign that is not followed by a digit.
    #[token("-", logos::skip)]
    Dash,
}

/// Returns every numeral found in `text`, in order of appearance.
///
/// # Example
/// ```
/// use mathqa::numeral::scan_numerals;
///
/// assert_eq!(scan_numerals("a ) 4 1 / 2"), vec!["4", "1", "2"]);
/// assert_eq!(scan_numerals("rs . -3.50 or 7"), vec!["-3.50", "7"]);
/// assert!(scan_numerals("none of these").is_empty());
/// ```
#[must_use]
pub fn scan_numerals(text: &str) -> Vec<&str> {
    let mut lexer = Scan::lexer(text);
    let mut numerals = Vec::new();

    while let Some(token) = lexer.next() {
        if token == Ok(Scan::Numeral) {
            numerals.push(lexer.slice());
        }
    }

    numerals
}

/// Parses `text` as a number if, and only if, the whole string is a single
/// numeral.
///
/// # Example
/// ```
/// use mathqa::numeral::parse_numeral;
///
/// assert_eq!(parse_numeral("120"), Some(120.0));
/// assert_eq!(parse_numeral("-0.25"), Some(-0.25));
/// assert_eq!(parse_numeral("1e5"), None);
/// assert_eq!(parse_numeral("12 apples"), None);
/// ```
#[must_use]
pub fn parse_numeral(text: &str) -> Option<f64> {
    let mut lexer = Scan::lexer(text);

    match lexer.next() {
        Some(Ok(Scan::Numeral)) if lexer.span() == (0..text.len()) => text.parse().ok(),
        _ => None,
    }
}

/// Returns the first numeral in `text` as a number.
#[must_use]
pub fn first_numeral(text: &str) -> Option<f64> {
    scan_numerals(text).first().and_then(|n| n.parse().ok())
}
