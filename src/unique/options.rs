//! Configuration for unique generation.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use super::store::Store;

/// Default time budget, shared by every call through one wrapper.
pub const DEFAULT_MAX_TIME: Duration = Duration::from_millis(50);

/// Default number of retries allowed per call.
pub const DEFAULT_MAX_RETRIES: u32 = 50;

/// Options describing how hard a wrapper tries to find a novel result.
///
/// Options are pure data: they describe the budgets and the excluded values
/// but do nothing on their own. Every field has a default, so only the
/// interesting ones need to be set.
///
/// # Examples
///
/// ```rust
/// use unique_callback::UniqueOptions;
/// use std::time::Duration;
///
/// let options = UniqueOptions::new()
///     .with_max_retries(10)
///     .with_max_time(Duration::from_millis(200))
///     .with_exclude(0);
///
/// assert_eq!(options.max_retries(), 10);
/// assert!(options.is_excluded(&0));
/// assert!(!options.is_excluded(&1));
/// ```
///
/// Options can also be read from any serde format. Missing fields keep their
/// defaults and `exclude` may be a single value or a list:
///
/// ```rust
/// use unique_callback::UniqueOptions;
///
/// let options: UniqueOptions<i32> =
///     serde_json::from_str(r#"{"max_time_ms": 500, "exclude": 0}"#).unwrap();
///
/// assert_eq!(options.max_time().as_millis(), 500);
/// assert_eq!(options.max_retries(), 50);
/// assert_eq!(options.exclude(), &[0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct UniqueOptions<T> {
    #[serde(rename = "max_time_ms", with = "duration_ms")]
    max_time: Duration,
    max_retries: u32,
    #[serde(deserialize_with = "one_or_many")]
    exclude: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<Store<T>>,
}

impl<T> UniqueOptions<T> {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self {
            max_time: DEFAULT_MAX_TIME,
            max_retries: DEFAULT_MAX_RETRIES,
            exclude: Vec::new(),
            store: None,
        }
    }

    /// Set the time budget.
    ///
    /// The budget is measured from wrapper construction, not per call, and
    /// is only checked before each generator invocation. A single slow
    /// invocation is never interrupted.
    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = max_time;
        self
    }

    /// Set the time budget in milliseconds.
    pub fn with_max_time_ms(self, millis: u64) -> Self {
        self.with_max_time(Duration::from_millis(millis))
    }

    /// Set the maximum number of retries per call.
    ///
    /// This does not include the initial attempt. For example,
    /// `with_max_retries(3)` allows up to 4 generator invocations per call.
    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Exclude a single value.
    pub fn with_exclude(mut self, value: T) -> Self {
        self.exclude.push(value);
        self
    }

    /// Exclude every value in `values`.
    pub fn with_excludes<I: IntoIterator<Item = T>>(mut self, values: I) -> Self {
        self.exclude.extend(values);
        self
    }

    /// Seed the wrapper with results it must treat as already seen.
    ///
    /// The store is moved into the options; pass a clone to keep your own copy.
    pub fn with_store(mut self, store: impl Into<Store<T>>) -> Self {
        self.store = Some(store.into());
        self
    }

    /// Get the time budget.
    pub fn max_time(&self) -> Duration {
        self.max_time
    }

    /// Get the retry limit.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Get the excluded values.
    pub fn exclude(&self) -> &[T] {
        &self.exclude
    }

    /// Get the initial store, if one was supplied.
    pub fn store(&self) -> Option<&Store<T>> {
        self.store.as_ref()
    }

    pub(crate) fn take_store(&mut self) -> Store<T> {
        self.store.take().unwrap_or_default()
    }
}

impl<T: PartialEq> UniqueOptions<T> {
    /// Returns true if `value` is in the exclude set.
    pub fn is_excluded(&self, value: &T) -> bool {
        self.exclude.contains(value)
    }
}

impl<T> Default for UniqueOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(values) => values,
        OneOrMany::One(value) => vec![value],
    })
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
