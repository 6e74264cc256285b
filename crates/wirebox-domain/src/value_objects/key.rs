//! Component keys and type-erased instances

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Type-erased product of a provider
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Stable identifier for a requested capability
///
/// Keys compare by name only. [`ComponentKey::of`] derives the name from a
/// Rust type, which is convenient when one type maps to one binding; use
/// [`ComponentKey::new`] for named or trait-level capabilities.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentKey(Cow<'static, str>);

impl ComponentKey {
    /// Create a key with an explicit name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Create a key named after `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    /// Key name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKey({})", self.0)
    }
}

impl From<&'static str> for ComponentKey {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentKey {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for ComponentKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
