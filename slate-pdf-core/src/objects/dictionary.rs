use crate::objects::Object;
use indexmap::IndexMap;
use std::fmt;

/// A PDF dictionary. Entries keep their insertion order so the rendered
/// output is deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    entries: IndexMap<String, Object>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates a dictionary whose first entry is `/Type /{type_name}`.
    pub fn with_type(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.set("Type", Object::name(type_name));
        dict
    }

    /// Adds or replaces an entry. Keys are given without the leading slash.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.entries.iter()
    }

    pub fn get_dict(&self, key: &str) -> Option<&Dictionary> {
        self.get(key).and_then(Object::as_dict)
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<<")?;
        for (key, value) in &self.entries {
            write!(f, "\n/{key} {value}")?;
        }
        f.write_str("\n>>")
    }
}

impl FromIterator<(String, Object)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, Object)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}
