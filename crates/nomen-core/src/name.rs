//! The shared name behavior
//!
//! [`Name<S>`] implements the full operation set of a masked hierarchical
//! name once, against the [`ComponentStore`] capability, so the two storage
//! strategies share every line of behavior. Contract checks gate each
//! operation: preconditions reject bad caller input, postconditions catch
//! storage-strategy defects, and the class invariant is verified at the
//! boundaries of every mutating operation.

use crate::store::{ArrayStore, ComponentStore, StringStore};
use nomen_codec::{join_masked, mask, split_masked, unmask, Delimiter};
use nomen_contract::{ensure, maintain, require, ContractResult};
use std::fmt::{self, Display, Formatter};

/// A masked hierarchical name
///
/// An ordered sequence of components (order-significant, duplicates and
/// empty components allowed) plus one delimiter character fixed at
/// construction. Components are held in masked form relative to that
/// delimiter; callers of the component-accepting operations must supply
/// them already masked. Unmasked input containing a literal delimiter or
/// escape character is not detected at the call site, only later through
/// broken round-trips.
///
/// # Example
///
/// ```rust
/// use nomen_core::ArrayName;
///
/// let name = ArrayName::from_components(
///     vec!["oss".into(), "cs".into(), "fau".into(), "de".into()],
///     '.',
/// )
/// .unwrap();
///
/// assert_eq!(name.count(), 4);
/// assert_eq!(name.as_string().unwrap(), "oss.cs.fau.de");
/// ```
#[derive(Debug, Clone)]
pub struct Name<S: ComponentStore> {
    store: S,
    delimiter: Delimiter,
}

/// A name storing its components as an explicit sequence
pub type ArrayName = Name<ArrayStore>;

/// A name storing its components as one delimiter-joined masked string
pub type StringName = Name<StringStore>;

impl<S: ComponentStore> Name<S> {
    /// Create a name from masked components and a delimiter character
    ///
    /// # Errors
    /// Precondition violation if `delimiter` is the escape character.
    pub fn new(components: Vec<String>, delimiter: char) -> ContractResult<Self> {
        let delimiter = Delimiter::new(delimiter)?;
        Self::new_with_delimiter(components, delimiter)
    }

    /// Create a name with no components
    ///
    /// # Errors
    /// Precondition violation if `delimiter` is the escape character.
    pub fn empty(delimiter: char) -> ContractResult<Self> {
        Self::new(Vec::new(), delimiter)
    }

    /// Parse a data string (default-delimited, masked) into a name that
    /// uses `delimiter`
    ///
    /// The components are unmasked against the default delimiter and
    /// re-masked against `delimiter`, so the resulting name renders the
    /// same data string it was parsed from.
    ///
    /// # Errors
    /// Precondition violation if `delimiter` is the escape character.
    pub fn from_data_string(data: &str, delimiter: char) -> ContractResult<Self> {
        let delimiter = Delimiter::new(delimiter)?;
        Self::new_with_delimiter(components_from_data_string(data, delimiter), delimiter)
    }

    fn new_with_delimiter(components: Vec<String>, delimiter: Delimiter) -> ContractResult<Self> {
        let name = Self {
            store: S::from_components(components, delimiter),
            delimiter,
        };
        name.check_invariant()?;
        Ok(name)
    }

    /// The delimiter character fixed at construction
    #[inline]
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter.get()
    }

    /// Number of components
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.count(self.delimiter)
    }

    /// Whether the name has no components
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The masked component at index `i`
    ///
    /// # Errors
    /// Precondition violation if `i >= count()`.
    pub fn component(&self, i: usize) -> ContractResult<String> {
        require(i < self.count(), "index out of bounds")?;
        self.check_invariant()?;

        let components = self.store.read(self.delimiter);
        Ok(components[i].clone())
    }

    /// Replace the component at index `i`
    ///
    /// # Errors
    /// Precondition violation if `i >= count()`; postcondition violation if
    /// the store changed the count or dropped the component.
    pub fn set_component(&mut self, i: usize, component: impl Into<String>) -> ContractResult<()> {
        require(i < self.count(), "index out of bounds")?;
        self.check_invariant()?;
        let before = self.count();
        let component = component.into();

        let mut components = self.store.read(self.delimiter);
        components[i] = component.clone();
        self.store.write(components, self.delimiter);

        ensure(
            self.count() == before,
            "set_component changed the component count",
        )?;
        ensure(
            self.store.read(self.delimiter)[i] == component,
            "set_component did not store the component",
        )?;
        self.check_invariant()
    }

    /// Insert a component at index `i`, shifting the rest right
    ///
    /// Insertion at `i == count()` appends.
    ///
    /// # Errors
    /// Precondition violation if `i > count()`; postcondition violation if
    /// the store did not grow by exactly one component at `i`.
    pub fn insert(&mut self, i: usize, component: impl Into<String>) -> ContractResult<()> {
        require(i <= self.count(), "index out of bounds for insert")?;
        self.check_invariant()?;
        let before = self.count();
        let component = component.into();

        let mut components = self.store.read(self.delimiter);
        components.insert(i, component.clone());
        self.store.write(components, self.delimiter);
        tracing::trace!("inserted component at {i}, {} total", before + 1);

        ensure(self.count() == before + 1, "insert did not grow the name")?;
        ensure(
            self.store.read(self.delimiter)[i] == component,
            "insert did not place the component at the index",
        )?;
        self.check_invariant()
    }

    /// Append a component at the end
    ///
    /// # Errors
    /// Postcondition violation if the store did not grow by one component.
    pub fn append(&mut self, component: impl Into<String>) -> ContractResult<()> {
        let at = self.count();
        self.insert(at, component)
    }

    /// Remove the component at index `i`
    ///
    /// # Errors
    /// Precondition violation if `i >= count()`; postcondition violation if
    /// the store did not shrink by exactly one component.
    pub fn remove(&mut self, i: usize) -> ContractResult<()> {
        require(i < self.count(), "index out of bounds")?;
        self.check_invariant()?;
        let before = self.count();

        let mut components = self.store.read(self.delimiter);
        components.remove(i);
        self.store.write(components, self.delimiter);
        tracing::trace!("removed component at {i}, {} remain", before - 1);

        ensure(
            self.count() == before - 1,
            "remove did not shrink the name",
        )?;
        self.check_invariant()
    }

    /// Append all of `other`'s components, in order
    ///
    /// `other` is left unchanged and may use either storage strategy. Its
    /// components arrive already masked per the interface contract and are
    /// taken over as-is.
    ///
    /// # Errors
    /// Postcondition violation if not every component was added.
    pub fn concat<T: ComponentStore>(&mut self, other: &Name<T>) -> ContractResult<()> {
        self.check_invariant()?;
        let before = self.count();
        let added = other.count();

        let mut components = self.store.read(self.delimiter);
        components.extend(other.store.read(other.delimiter));
        self.store.write(components, self.delimiter);
        tracing::debug!("concat added {added} components, {} total", before + added);

        ensure(
            self.count() == before + added,
            "concat did not add every component",
        )?;
        self.check_invariant()
    }

    /// Human-readable form: unmasked components joined with the own
    /// delimiter
    ///
    /// # Errors
    /// Postcondition violation if components were lost in the rendering.
    pub fn as_string(&self) -> ContractResult<String> {
        self.as_string_with(self.delimiter.get())
    }

    /// Human-readable form joined with an arbitrary delimiter
    ///
    /// Components are unmasked against the own delimiter and joined with
    /// `delimiter`, which is not re-escaped. A component containing the
    /// join delimiter literally produces an ambiguous but well-defined
    /// string; human-readable mode trades reversibility for simplicity.
    ///
    /// # Errors
    /// Postcondition violation if components were lost in the rendering.
    pub fn as_string_with(&self, delimiter: char) -> ContractResult<String> {
        self.check_invariant()?;

        let raw: Vec<String> = self
            .store
            .read(self.delimiter)
            .iter()
            .map(|c| unmask(c, self.delimiter))
            .collect();
        let mut sep = [0u8; 4];
        let result = raw.join(delimiter.encode_utf8(&mut sep));

        // A naive split may find more parts than components (unmasked
        // components can contain the join delimiter); fewer means loss.
        let parts = if result.is_empty() {
            0
        } else {
            result.split(delimiter).count()
        };
        ensure(parts >= self.count(), "as_string lost components")?;

        Ok(result)
    }

    /// Machine-readable form: components re-masked against the default
    /// delimiter and joined with it
    ///
    /// Always exactly re-parseable with an escape-aware split on the
    /// default delimiter, regardless of the name's own delimiter.
    ///
    /// # Errors
    /// Postcondition violation if re-splitting the result does not yield
    /// exactly `count()` parts. The name holding exactly one empty
    /// component renders as `""`, which re-splits to zero parts and
    /// therefore fails here; the joined form cannot distinguish it from
    /// the empty name.
    pub fn as_data_string(&self) -> ContractResult<String> {
        self.check_invariant()?;

        let result = self.render_data_string();
        let reparsed = split_masked(&result, Delimiter::DEFAULT);
        ensure(
            reparsed.len() == self.count(),
            "data string does not re-split into the same number of components",
        )?;

        Ok(result)
    }

    /// Value equality: same component count, pairwise-identical masked
    /// components, same delimiter character
    #[must_use]
    pub fn is_equal<T: ComponentStore>(&self, other: &Name<T>) -> bool {
        self.delimiter == other.delimiter
            && self.store.read(self.delimiter) == other.store.read(other.delimiter)
    }

    /// Deterministic hash over the delimiter and the data-string form
    ///
    /// Names equal under [`Self::is_equal`] produce equal hash codes.
    ///
    /// # Errors
    /// Propagates the [`Self::as_data_string`] postcondition.
    pub fn hash_code(&self) -> ContractResult<u64> {
        let digest = self.digest()?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest.as_bytes()[..8]);
        Ok(u64::from_le_bytes(bytes))
    }

    /// Short hex fingerprint of the name digest, for log lines
    ///
    /// # Errors
    /// Propagates the [`Self::as_data_string`] postcondition.
    pub fn fingerprint(&self) -> ContractResult<String> {
        let digest = self.digest()?;
        Ok(hex::encode(&digest.as_bytes()[..8]))
    }

    fn digest(&self) -> ContractResult<blake3::Hash> {
        let repr = format!("{}:{}", self.delimiter, self.as_data_string()?);
        Ok(blake3::hash(repr.as_bytes()))
    }

    fn render_data_string(&self) -> String {
        let remasked: Vec<String> = self
            .store
            .read(self.delimiter)
            .iter()
            .map(|c| mask(&unmask(c, self.delimiter), Delimiter::DEFAULT))
            .collect();
        join_masked(&remasked, Delimiter::DEFAULT)
    }

    fn check_invariant(&self) -> ContractResult<()> {
        maintain(
            self.delimiter.get() != nomen_codec::ESCAPE_CHARACTER,
            "delimiter equals the escape character",
        )?;
        maintain(
            self.store.count(self.delimiter) == self.store.read(self.delimiter).len(),
            "cached component count disagrees with the decoded components",
        )
    }
}

impl ArrayName {
    /// Create an array-backed name from masked components
    ///
    /// # Errors
    /// Precondition violation if `delimiter` is the escape character.
    pub fn from_components(components: Vec<String>, delimiter: char) -> ContractResult<Self> {
        Self::new(components, delimiter)
    }
}

impl StringName {
    /// Create a string-backed name from an already-joined masked string
    ///
    /// `source` is split on unescaped occurrences of `delimiter`; the empty
    /// string is the empty name.
    ///
    /// # Errors
    /// Precondition violation if `delimiter` is the escape character.
    pub fn from_delimited(source: &str, delimiter: char) -> ContractResult<Self> {
        let delimiter = Delimiter::new(delimiter)?;
        let name = Self {
            store: StringStore::from_joined(source, delimiter),
            delimiter,
        };
        name.check_invariant()?;
        Ok(name)
    }
}

impl<S: ComponentStore, T: ComponentStore> PartialEq<Name<T>> for Name<S> {
    fn eq(&self, other: &Name<T>) -> bool {
        self.is_equal(other)
    }
}

impl<S: ComponentStore> Display for Name<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_data_string())
    }
}

impl<S: ComponentStore> serde::Serialize for Name<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Name", 2)?;
        state.serialize_field("delimiter", &self.delimiter)?;
        state.serialize_field("name", &self.render_data_string())?;
        state.end()
    }
}

impl<'de, S: ComponentStore> serde::Deserialize<'de> for Name<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Record {
            delimiter: Delimiter,
            name: String,
        }

        let record = Record::deserialize(deserializer)?;
        let components = components_from_data_string(&record.name, record.delimiter);
        Self::new_with_delimiter(components, record.delimiter).map_err(serde::de::Error::custom)
    }
}

/// Unmask a data string against the default delimiter and re-mask each
/// component against `delimiter`
fn components_from_data_string(data: &str, delimiter: Delimiter) -> Vec<String> {
    split_masked(data, Delimiter::DEFAULT)
        .iter()
        .map(|c| mask(&unmask(c, Delimiter::DEFAULT), delimiter))
        .collect()
}
