use crate::error::ReferenceError;

/// The append-only record of intermediate results.
///
/// Operation `i` stores its result in slot `i`; a back-reference `#i` reads
/// it. Slots are never overwritten, so a reference can only look backwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryBank {
    values: Vec<f64>,
}

impl MemoryBank {
    /// Creates an empty memory bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Resolves the text after `#` in a back-reference.
    ///
    /// # Errors
    /// - `ReferenceError::Malformed` if `index` is not a non-negative integer.
    /// - `ReferenceError::OutOfBounds` if no result has been stored there yet.
    ///
    /// # Example
    /// ```
    /// use mathqa::interpreter::memory::MemoryBank;
    ///
    /// let mut memory = MemoryBank::new();
    /// memory.push(4.0);
    /// assert_eq!(memory.resolve("0", 1).unwrap(), 4.0);
    /// assert!(memory.resolve("1", 1).is_err());
    /// assert!(memory.resolve("x", 1).is_err());
    /// ```
    pub fn resolve(&self, index: &str, step: usize) -> Result<f64, ReferenceError> {
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReferenceError::Malformed { token: format!("#{index}"),
                                                   step });
        }
        let index: usize = index.parse()
                                .map_err(|_| ReferenceError::Malformed { token: format!("#{index}"),
                                                                         step })?;

        self.values
            .get(index)
            .copied()
            .ok_or(ReferenceError::OutOfBounds { index,
                                                 len: self.values.len(),
                                                 step })
    }

    /// The most recent result.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Number of stored results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All stored results, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
