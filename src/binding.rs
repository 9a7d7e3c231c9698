use crate::program::{operation::LinearProgram, token::placeholder_index};

/// Numeral used for a placeholder when the problem text holds no numbers.
pub const FALLBACK_NUMERAL: &str = "1";

/// Extracts the numerals a problem's `n<i>` placeholders refer to.
///
/// The text is split on whitespace and commas are removed from each piece. A
/// piece is kept when it is all ASCII digits, or digits, a single `.`, and
/// digits. Signs, units and trailing punctuation disqualify a piece.
///
/// # Example
/// ```
/// use mathqa::binding::extract_numerals;
///
/// let text = "a train 1,200 m long runs at 54.5 km / hr for 3 hours .";
/// assert_eq!(extract_numerals(text), vec!["1200", "54.5", "3"]);
/// assert!(extract_numerals("-4 12kg 3. .5").is_empty());
/// ```
#[must_use]
pub fn extract_numerals(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|piece| piece.replace(',', ""))
        .filter(|piece| is_digits(piece) || piece.split_once('.').is_some_and(|(l, r)| is_digits(l) && is_digits(r)))
        .collect()
}

/// Replaces every `n<i>` token with the `i`-th numeral.
///
/// An index past the end of `numerals` is logged and bound to the first
/// numeral instead, or to [`FALLBACK_NUMERAL`] when there are none.
///
/// # Example
/// ```
/// use mathqa::binding::bind_placeholders;
///
/// let mut tokens = vec!["add".to_string(), "n0".to_string(), "n3".to_string()];
/// bind_placeholders(&mut tokens, &["7".to_string(), "9".to_string()]);
/// assert_eq!(tokens, vec!["add", "7", "7"]);
/// ```
pub fn bind_placeholders(tokens: &mut [String], numerals: &[String]) {
    for token in tokens.iter_mut() {
        bind_token(token, numerals);
    }
}

/// Binds the placeholders of every operation in `program`.
pub fn bind_program(program: &mut LinearProgram, numerals: &[String]) {
    for argument in program.arguments_mut() {
        bind_token(argument, numerals);
    }
}

fn bind_token(token: &mut String, numerals: &[String]) {
    let Some(index) = placeholder_index(token) else {
        return;
    };

    let bound = match numerals.get(index) {
        Some(numeral) => numeral.clone(),
        None => {
            let fallback = numerals.first().map_or(FALLBACK_NUMERAL, String::as_str);
            tracing::error!(placeholder = %token,
                            available = numerals.len(),
                            fallback,
                            "placeholder index out of range");
            fallback.to_string()
        },
    };
    *token = bound;
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
