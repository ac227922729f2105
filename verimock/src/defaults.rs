use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

type Factory = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// Per-type answers of a relaxed mock for calls that match no stub.
///
/// Only the types registered here are answered; any other unstubbed call
/// still fails.
///
/// ```
/// use verimock::Defaults;
///
/// let defaults = Defaults::new().with(String::new).with(|| 0u64);
/// assert!(defaults.contains::<String>());
/// assert!(!defaults.contains::<bool>());
/// ```
#[derive(Default)]
pub struct Defaults {
    table: HashMap<TypeId, Factory>,
}

impl Defaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relaxes methods returning `()` only.
    pub fn unit() -> Self {
        Self::new().with(|| ())
    }

    /// Registers `factory` as the answer for unstubbed calls returning `T`,
    /// replacing an earlier registration for the same type.
    pub fn with<T, F>(mut self, factory: F) -> Self
    where
        T: Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.table.insert(
            TypeId::of::<T>(),
            Box::new(move || Box::new(factory()) as Box<dyn Any + Send>),
        );
        self
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.table.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub(crate) fn get<T: 'static>(&self) -> Option<T> {
        let factory = self.table.get(&TypeId::of::<T>())?;
        factory().downcast::<T>().ok().map(|value| *value)
    }
}

impl fmt::Debug for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaults")
            .field("types", &self.table.len())
            .finish()
    }
}
