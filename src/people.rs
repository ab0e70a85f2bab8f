//! Person records flowing through a heap
//!
//! [`Person`] and [`People`] are plain immutable values: every transform
//! returns a new record or collection. They show how a structured value enters
//! a [`MinHeap`] by projecting one ordered field, here the age.
//!
//! ```rust
//! use rust_min_heap::people::{People, Person};
//!
//! let family: People = [
//!     Person::new("ada", "Byron", 36),
//!     Person::new("annabella", "Byron", 8),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(family.youngest_age(), Some(8));
//! assert_eq!(family.grown_ups().len(), 1);
//! ```

use std::fmt;

use crate::binary::MinHeap;
use crate::traits::Heap;

/// Age from which a person counts as a grown-up
pub const AGE_OF_MAJORITY: u32 = 18;

/// Oldest age that still counts as a kid
pub const MAX_KID_AGE: u32 = 10;

/// A named person of some age
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    /// Given name, as entered
    pub first_name: String,
    /// Family name, as entered
    pub last_name: String,
    /// Age in whole years
    pub age: u32,
}

impl Person {
    /// Creates a person from any string-like names
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    /// First and last name separated by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the person has reached [`AGE_OF_MAJORITY`]
    pub fn is_of_age(&self) -> bool {
        self.age >= AGE_OF_MAJORITY
    }

    /// Whether the person is at most [`MAX_KID_AGE`]
    pub fn is_kid(&self) -> bool {
        self.age <= MAX_KID_AGE
    }

    /// A copy with a different age
    pub fn with_age(&self, age: u32) -> Self {
        Self { age, ..self.clone() }
    }

    /// A copy with a different last name
    pub fn with_last_name(&self, last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            ..self.clone()
        }
    }
}

/// Upper-cases the first letter of each word and lower-cases the rest
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person({}, {})", title_case(&self.first_name), self.age)
    }
}

/// An ordered collection of people
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct People(Vec<Person>);

impl People {
    /// An empty collection
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of people
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nobody is in the collection
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The person at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Person> {
        self.0.get(index)
    }

    /// Iterates over the people in order
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.0.iter()
    }

    /// Applies `f` to every person, keeping the order
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&Person) -> Person,
    {
        Self(self.0.iter().map(f).collect())
    }

    /// Keeps the people for which `f` holds, in order
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Person) -> bool,
    {
        Self(self.0.iter().filter(|p| f(p)).cloned().collect())
    }

    /// Everyone one year older; an age of `u32::MAX` stays put
    pub fn new_year(&self) -> Self {
        self.map(|p| p.with_age(p.age.saturating_add(1)))
    }

    /// The people who still count as kids
    pub fn kids(&self) -> Self {
        self.filter(Person::is_kid)
    }

    /// The people who are of age
    pub fn grown_ups(&self) -> Self {
        self.filter(Person::is_of_age)
    }

    /// Sum of all ages
    pub fn total_age(&self) -> u64 {
        self.0.iter().map(|p| u64::from(p.age)).sum()
    }

    /// The ages, heapified
    pub fn ages_heap(&self) -> MinHeap<u32> {
        self.0.iter().map(|p| p.age).collect()
    }

    /// The smallest age, read off the top of [`ages_heap`](Self::ages_heap)
    pub fn youngest_age(&self) -> Option<u32> {
        self.ages_heap().peek_minimum().copied()
    }
}

impl FromIterator<Person> for People {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Person>> for People {
    fn from(people: Vec<Person>) -> Self {
        Self(people)
    }
}

impl IntoIterator for People {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a People {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for People {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("People(")?;
        for (i, person) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{person}")?;
        }
        f.write_str(")")
    }
}
