use std::{convert::Infallible, fmt, str::FromStr};

/// An absolute path into the state tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StatePath {
    /// Stored path segments.
    path: Vec<String>,
}

impl FromStr for StatePath {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for StatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path.join("/"))
    }
}

impl StatePath {
    /// Construct an empty path, which addresses the root map.
    pub fn empty() -> Self {
        Self { path: vec![] }
    }

    /// Construct a path from a sequence of segments. Empty segments are
    /// dropped.
    pub fn new<I>(v: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            path: v
                .into_iter()
                .filter(|x| !x.as_ref().is_empty())
                .map(|x| x.as_ref().to_string())
                .collect(),
        }
    }

    /// A new path with the given segments appended.
    pub fn join<I>(&self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut path = self.path.clone();
        path.extend(
            segments
                .into_iter()
                .filter(|x| !x.as_ref().is_empty())
                .map(|x| x.as_ref().to_string()),
        );
        Self { path }
    }

    /// A new path with one segment appended.
    pub fn child(&self, name: &str) -> Self {
        self.join([name])
    }

    /// The segments of this path.
    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// The final segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Is this the root path?
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.path.len()
    }
}

impl From<Vec<String>> for StatePath {
    fn from(path: Vec<String>) -> Self {
        Self::new(path)
    }
}

impl From<&[&str]> for StatePath {
    fn from(v: &[&str]) -> Self {
        Self::new(v.iter().copied())
    }
}

impl From<&str> for StatePath {
    fn from(v: &str) -> Self {
        Self::new(v.split('/'))
    }
}
