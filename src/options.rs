use std::ops::Index;

use crate::{
    error::{StructuralError, StructuralResult},
    number::Number,
    numeral::{first_numeral, scan_numerals},
};

/// Number of answer options every problem carries.
pub const OPTION_COUNT: usize = 5;

/// Option labels, in slot order.
pub const OPTION_LABELS: [char; OPTION_COUNT] = ['a', 'b', 'c', 'd', 'e'];

/// The five candidate answers of a problem, in slot order `a` to `e`.
///
/// A slot is `None` when its text held no usable number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptionSet {
    slots: [Option<Number>; OPTION_COUNT],
}

impl OptionSet {
    /// Creates an option set from its five slots.
    #[must_use]
    pub const fn new(slots: [Option<Number>; OPTION_COUNT]) -> Self {
        Self { slots }
    }

    /// All five slots.
    #[must_use]
    pub const fn slots(&self) -> &[Option<Number>; OPTION_COUNT] {
        &self.slots
    }

    /// The slot at `index`, or `None` past the fifth.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Option<Number>> {
        self.slots.get(index).copied()
    }

    /// The slot for a label `a` to `e`.
    ///
    /// Returns `None` for a label outside that range; a slot that exists but
    /// could not be parsed is `Some(None)`.
    ///
    /// # Example
    /// ```
    /// use mathqa::{number::Number, options::extract_options};
    ///
    /// let options = extract_options("a ) 10, b ) 20, c ) none, d ) 40, e ) 50").unwrap();
    /// assert_eq!(options.by_label('b'), Some(Some(Number::Integer(20))));
    /// assert_eq!(options.by_label('c'), Some(None));
    /// assert_eq!(options.by_label('f'), None);
    /// ```
    #[must_use]
    pub fn by_label(&self, label: char) -> Option<Option<Number>> {
        OPTION_LABELS.iter()
                     .position(|&l| l == label.to_ascii_lowercase())
                     .and_then(|index| self.get(index))
    }

    /// The value of the gold answer, given its label as written in the data.
    ///
    /// # Errors
    /// `StructuralError::InvalidOptionLabel` unless `label` is a single letter
    /// `a` to `e` (surrounding whitespace ignored).
    pub fn gold_value(&self, label: &str) -> StructuralResult<Option<Number>> {
        let trimmed = label.trim();
        let mut chars = trimmed.chars();

        let slot = match (chars.next(), chars.next()) {
            (Some(c), None) => self.by_label(c),
            _ => None,
        };
        slot.ok_or_else(|| StructuralError::InvalidOptionLabel { label: label.to_string() })
    }

    /// Iterates over the slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &Option<Number>> {
        self.slots.iter()
    }
}

impl Index<usize> for OptionSet {
    type Output = Option<Number>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a Option<Number>;
    type IntoIter = std::slice::Iter<'a, Option<Number>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl std::fmt::Display for OptionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (label, slot)) in OPTION_LABELS.iter().zip(&self.slots).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(value) => write!(f, "{label}) {value}")?,
                None => write!(f, "{label}) -")?,
            }
        }
        Ok(())
    }
}

/// Normalizes a free-text option string into five canonical numbers.
///
/// The string must split on `", "` into exactly five groups. Commas left inside
/// a group are thousands separators and are removed. Each group is then read
/// as a plain number, a ratio `X : Y`, a fraction `X / Y`, or a mixed number
/// `W X / Y`. Ratios, fractions and mixed numbers are rounded to five
/// decimals. A group with no number at all becomes `None`.
///
/// # Errors
/// `StructuralError::OptionCount` if the string does not hold exactly five
/// groups. Problems inside a single group never fail the whole set.
///
/// # Example
/// ```
/// use mathqa::{number::Number, options::extract_options};
///
/// let options = extract_options("a ) 1 / 2, b ) 3 : 8, c ) 4 1 / 2, d ) 1,200, e ) 7").unwrap();
/// assert_eq!(options[0], Some(Number::Real(0.5)));
/// assert_eq!(options[1], Some(Number::Real(0.375)));
/// assert_eq!(options[2], Some(Number::Real(4.5)));
/// assert_eq!(options[3], Some(Number::Integer(1200)));
/// assert_eq!(options[4], Some(Number::Integer(7)));
///
/// assert!(extract_options("1, 2, 3").is_err());
/// ```
pub fn extract_options(text: &str) -> StructuralResult<OptionSet> {
    let groups: Vec<&str> = text.split(", ").collect();
    if groups.len() != OPTION_COUNT {
        tracing::warn!(found = groups.len(), options = text, "bad options formatting");
        return Err(StructuralError::OptionCount { found: groups.len() });
    }

    let mut slots = [None; OPTION_COUNT];
    for (slot, group) in slots.iter_mut().zip(groups) {
        *slot = parse_group(&group.replace(',', ""));
    }

    Ok(OptionSet::new(slots))
}

fn parse_group(group: &str) -> Option<Number> {
    let numerals = scan_numerals(group);

    match numerals.as_slice() {
        [] => {
            tracing::warn!(option = group, "option holds no number");
            None
        },
        [single] => single.parse().ok().map(Number::canonical),
        [_, _] if group.contains(':') => ratio(group, ':'),
        [_, _] if group.contains('/') => ratio(group, '/'),
        [_, _, _] if group.contains('/') => mixed_number(group, '/'),
        [_, _, _] if group.contains(':') => mixed_number(group, ':'),
        [first, ..] => {
            tracing::warn!(option = group, "cannot read option, defaulting to its first number");
            first.parse().ok().map(Number::canonical)
        },
    }
}

/// `X sep Y` as `X / Y`, taking the first numeral on each side.
fn ratio(group: &str, separator: char) -> Option<Number> {
    let (before, after) = group.split_once(separator)?;
    let lhs = first_numeral(before)?;
    let rhs = first_numeral(after)?;

    if rhs == 0.0 {
        tracing::warn!(option = group, "ratio divides by zero");
        return None;
    }
    Some(Number::rounded(lhs / rhs))
}

/// `W X sep Y` as `W + X / Y`.
fn mixed_number(group: &str, separator: char) -> Option<Number> {
    let (before, after) = group.split_once(separator)?;
    let (whole, numerator) = match scan_numerals(before).as_slice() {
        [whole, numerator, ..] => (whole.parse::<f64>().ok()?, numerator.parse::<f64>().ok()?),
        _ => {
            tracing::warn!(option = group, "mixed number lacks a whole part");
            return None;
        },
    };
    let denominator = first_numeral(after)?;

    if denominator == 0.0 {
        tracing::warn!(option = group, "mixed number divides by zero");
        return None;
    }
    Some(Number::rounded(whole + numerator / denominator))
}
