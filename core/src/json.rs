//! JSON extraction path components.

/// One step in a JSON extraction path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonPathElement {
    Key(String),
    Index(i64),
}

impl JsonPathElement {
    /// String form of the element, as required by text-array path operators.
    /// Indices lose their numeric distinction here.
    pub fn to_path_string(&self) -> String {
        match self {
            JsonPathElement::Key(key) => key.clone(),
            JsonPathElement::Index(index) => index.to_string(),
        }
    }
}

impl From<&str> for JsonPathElement {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for JsonPathElement {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<i64> for JsonPathElement {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for JsonPathElement {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<usize> for JsonPathElement {
    fn from(index: usize) -> Self {
        Self::Index(index as i64)
    }
}
