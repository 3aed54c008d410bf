use std::fmt;

/// Metadata naming the key a type registers under.
///
/// Types with `KEY = None` are offered to the registry but never
/// registered.
pub trait CapabilityKey {
    const KEY: Option<&'static str>;
}

/// A concrete type offered to a registry during discovery
pub struct Candidate<C: ?Sized> {
    type_name: &'static str,
    key: Option<&'static str>,
    construct: fn() -> Box<C>,
}

impl<C: ?Sized> Candidate<C> {
    pub fn new(type_name: &'static str, key: Option<&'static str>, construct: fn() -> Box<C>) -> Self {
        Self {
            type_name,
            key,
            construct,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn key(&self) -> Option<&'static str> {
        self.key
    }

    pub fn constructor(&self) -> fn() -> Box<C> {
        self.construct
    }
}

impl<C: ?Sized> Clone for Candidate<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Candidate<C> {}

impl<C: ?Sized> fmt::Debug for Candidate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("type_name", &self.type_name)
            .field("key", &self.key)
            .finish()
    }
}
