use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::person::Person;

/// An undirected friendship link.
///
/// `tail` and `head` record the order the link was inserted in, but equality
/// and hashing treat the pair as unordered: `Rachel - Ross` equals
/// `Ross - Rachel`.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    tail: Person,
    head: Person,
}

impl Edge {
    pub(crate) fn new(tail: Person, head: Person) -> Self {
        Self { tail, head }
    }

    pub fn tail(&self) -> &Person {
        &self.tail
    }

    pub fn head(&self) -> &Person {
        &self.head
    }

    /// True if this edge links `a` and `b`, in either order
    pub fn connects(&self, a: &Person, b: &Person) -> bool {
        (self.tail == *a && self.head == *b) || (self.tail == *b && self.head == *a)
    }

    fn ordered(&self) -> (&Person, &Person) {
        match self.tail.cmp(&self.head) {
            Ordering::Greater => (&self.head, &self.tail),
            _ => (&self.tail, &self.head),
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.tail, &other.head)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.tail, self.head)
    }
}

/// Hop count between two people.
///
/// Renders as the conventional integer form: the hop count when reachable,
/// `-1` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    Reachable(u32),
    Unreachable,
}

impl Distance {
    /// Integer used for [`Distance::Unreachable`] in printed and JSON output
    pub const UNREACHABLE: i64 = -1;

    pub fn hops(&self) -> Option<u32> {
        match self {
            Distance::Reachable(hops) => Some(*hops),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            Distance::Reachable(hops) => i64::from(*hops),
            Distance::Unreachable => Self::UNREACHABLE,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}
