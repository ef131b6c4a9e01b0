use std::fmt::{self, Display};

///
/// The attribute column of a region.
///
/// Attributes read from a file are kept verbatim as `text`, so the column is written
/// back exactly as it came in. Attributes added afterwards are kept as ordered
/// `key value` entries and rendered after the text, separated by `"; "`.
///
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    text: Option<String>,
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Wrap a raw attribute column. An empty column or a lone `.` holds no text.
    ///
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        let text = match trimmed.is_empty() || trimmed == "." {
            true => None,
            false => Some(trimmed.to_string()),
        };
        Attributes {
            text,
            entries: Vec::new(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    ///
    /// Append to the raw attribute text, starting a new text if none exists.
    ///
    pub fn append_text(&mut self, suffix: &str) {
        match self.text.as_mut() {
            Some(text) => text.push_str(suffix),
            None => self.text = Some(suffix.to_string()),
        }
    }

    ///
    /// Insert an entry, replacing the value in place if the key already exists.
    ///
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.entries.is_empty()
    }
}

impl Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, ".");
        }

        let parts: Vec<String> = self
            .text
            .iter()
            .cloned()
            .chain(self.entries.iter().map(|(k, v)| format!("{} {}", k, v)))
            .collect();

        write!(f, "{}", parts.join("; "))
    }
}
