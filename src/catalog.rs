use std::{
    collections::{HashMap, HashSet},
    path::Path,
    str::FromStr,
};

use crate::{error::CatalogError, interpreter::registry::PRIMITIVE_TABLE};

/// The operator catalog: every operator name a program may use, with the
/// exact number of arguments it takes.
///
/// A catalog is built once and then only read. The converter, validator and
/// interpreter all borrow it, so a batch running on many threads can share a
/// single instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorCatalog {
    arities: HashMap<String, usize>,
}

impl OperatorCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the catalog matching the interpreter's primitive registry.
    ///
    /// # Example
    /// ```
    /// use mathqa::catalog::OperatorCatalog;
    ///
    /// let catalog = OperatorCatalog::builtin();
    /// assert_eq!(catalog.arity("add"), Some(2));
    /// assert_eq!(catalog.arity("factorial"), Some(1));
    /// assert_eq!(catalog.arity("volume_rectangular_prism"), Some(3));
    /// assert_eq!(catalog.arity("reminder"), Some(2));
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        PRIMITIVE_TABLE.iter()
                       .map(|p| (p.name, p.arity))
                       .collect()
    }

    /// Parses the line-oriented catalog format, one `name | arity` per line.
    ///
    /// Blank lines are ignored. Arities must be positive integers.
    ///
    /// # Errors
    /// Returns a `CatalogError` carrying the one-based line number of the
    /// first malformed line, non-positive arity, or duplicated operator.
    ///
    /// # Example
    /// ```
    /// use mathqa::catalog::OperatorCatalog;
    ///
    /// let catalog = OperatorCatalog::parse("add | 2\nfactorial | 1\n").unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert!(OperatorCatalog::parse("add 2").is_err());
    /// assert!(OperatorCatalog::parse("add | 0").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let mut arities = HashMap::new();

        for (i, raw) in source.lines().enumerate() {
            let line = i + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let (name, arity) = raw.split_once('|')
                                   .ok_or_else(|| CatalogError::MalformedLine { content: raw.to_string(),
                                                                                line })?;
            let name = name.trim();
            let arity = arity.trim();
            if name.is_empty() {
                return Err(CatalogError::MalformedLine { content: raw.to_string(),
                                                         line });
            }

            let arity = match arity.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(CatalogError::InvalidArity { value: arity.to_string(),
                                                            line });
                },
            };

            if arities.insert(name.to_string(), arity).is_some() {
                return Err(CatalogError::DuplicateOperator { name: name.to_string(),
                                                             line });
            }
        }

        Ok(Self { arities })
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    /// Returns `CatalogError::Io` if the file cannot be read, or any error
    /// [`OperatorCatalog::parse`] reports.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io { path: path.display().to_string(),
                                                                                        source })?;
        let catalog = Self::parse(&source)?;
        tracing::info!(path = %path.display(), operators = catalog.len(), "loaded operator catalog");
        Ok(catalog)
    }

    /// Returns the arity of `name`, or `None` if it is not an operator.
    #[must_use]
    pub fn arity(&self, name: &str) -> Option<usize> {
        self.arities.get(name).copied()
    }

    /// Returns `true` if `name` is an operator.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.arities.contains_key(name)
    }

    /// Number of operators in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arities.len()
    }

    /// Returns `true` if the catalog declares no operators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arities.is_empty()
    }

    /// Iterates over `(name, arity)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.arities.iter().map(|(name, arity)| (name.as_str(), *arity))
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for OperatorCatalog {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self { arities: iter.into_iter()
                            .map(|(name, arity)| (name.into(), arity))
                            .collect(), }
    }
}

impl FromStr for OperatorCatalog {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reads an allowed-argument list, one argument per line.
///
/// Lines are trimmed and blank lines are skipped.
///
/// # Example
/// ```
/// use mathqa::catalog::read_argument_set;
///
/// let allowed = read_argument_set("n0\nn1\n\nconst_100\n");
/// assert_eq!(allowed.len(), 3);
/// assert!(allowed.contains("const_100"));
/// ```
#[must_use]
pub fn read_argument_set(source: &str) -> HashSet<String> {
    source.lines()
          .map(str::trim)
          .filter(|line| !line.is_empty())
          .map(str::to_string)
          .collect()
}
