//! Folded HTTP header mapping
use std::fmt::Display;

mod de;
mod ser;

/// Separator placed between values of repeated header names.
pub const VALUE_SEPARATOR: &str = ", ";

/// Ordered mapping of header names to a single folded value.
///
/// Keys iterate in the order they were first seen. Names are compared
/// exactly, so `Vary` and `vary` are two distinct entries. Use
/// [`HeaderMap::get_ignore_ascii_case`] for HTTP-style lookups.
///
/// No validation is performed on whether the names or values are valid HTTP
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: Vec<(String, String)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.fields.clear()
    }

    /// Set the value of a name, replacing any existing value.
    ///
    /// A replaced entry keeps its position.
    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();

        match self.position(&name) {
            Some(index) => self.fields[index].1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Add a value to a name.
    ///
    /// If the name already exists, the value is appended to the existing one
    /// separated by `", "`. Otherwise a new entry is added at the end.
    pub fn merge<N: Into<String>, V: AsRef<str>>(&mut self, name: N, value: V) {
        let name = name.into();

        match self.position(&name) {
            Some(index) => {
                let existing = &mut self.fields[index].1;
                existing.push_str(VALUE_SEPARATOR);
                existing.push_str(value.as_ref());
            }
            None => self.fields.push((name, value.as_ref().to_string())),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.position(name)?;
        Some(self.fields.remove(index).1)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|index| self.fields[index].1.as_str())
    }

    /// Returns the value of the first name matching without ASCII case-sensitivity.
    pub fn get_ignore_ascii_case(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _v)| n.eq_ignore_ascii_case(name))
            .map(|(_n, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _v)| n.as_str())
    }

    pub fn iter(&self) -> HeaderMapIter<'_> {
        HeaderMapIter::new(&self.fields)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _v)| n == name)
    }
}

impl IntoIterator for HeaderMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a str);
    type IntoIter = HeaderMapIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Into<String>, V: AsRef<str>> Extend<(N, V)> for HeaderMap {
    fn extend<T: IntoIterator<Item = (N, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.merge(name, value);
        }
    }
}

impl<N: Into<String>, V: AsRef<str>> FromIterator<(N, V)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl Display for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in &self.fields {
            write!(f, "{}: {}\r\n", name, value)?;
        }

        Ok(())
    }
}

pub struct HeaderMapIter<'a> {
    fields: std::slice::Iter<'a, (String, String)>,
}

impl<'a> HeaderMapIter<'a> {
    fn new(fields: &'a [(String, String)]) -> Self {
        Self {
            fields: fields.iter(),
        }
    }
}

impl<'a> Iterator for HeaderMapIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.fields.next().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.fields.size_hint()
    }
}
