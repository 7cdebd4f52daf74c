//! People: the vertex labels of a friendship graph

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A person, identified solely by name.
///
/// Two `Person` values with the same name are the same vertex as far as a
/// graph is concerned. Names are compared exactly (case-sensitive) and may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Hash and Eq both derive from `name` alone, so lookups by `&str` agree with
// lookups by `Person`.
impl Borrow<str> for Person {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Person::new(name)
    }
}

impl From<String> for Person {
    fn from(name: String) -> Self {
        Person::new(name)
    }
}
