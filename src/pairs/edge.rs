use std::fmt::Display;

/// An unordered pair of knowledge source names.
///
/// Endpoints are stored sorted, so `(a, b)` and `(b, a)` build the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    a: String,
    b: String,
}

impl EdgeKey {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        EdgeKey { a, b }
    }

    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

impl Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}
