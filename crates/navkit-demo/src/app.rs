//! # Example App Model
//!
//! Two persistent tabs (a person directory and a random-number screen) plus
//! a transient profile flow opened on top of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use navkit_core::{Flow, Resolvable};

/// Top-level sections of the example app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppFlow {
    /// "Persons" tab.
    ProfileList,
    /// "Random" tab.
    Random,
    /// A single profile opened from outside the tabs; torn down when closed.
    Profile,
}

impl AppFlow {
    /// Snake-case name, as used in snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileList => "profile_list",
            Self::Random => "random",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for AppFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Flow for AppFlow {
    fn is_transient(&self) -> bool {
        matches!(self, Self::Profile)
    }
}

/// Screens of the profile section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileDestination {
    /// Everyone in the directory.
    List,
    /// One person's profile.
    Details {
        /// Person id in the [`PersonStore`].
        user_id: String,
    },
    /// One person's full name on its own screen.
    FullName {
        /// Person id in the [`PersonStore`].
        user_id: String,
    },
}

impl Resolvable for ProfileDestination {}

/// Screens of the random-number section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomDestination {
    /// The number generator.
    Home,
}

impl Resolvable for RandomDestination {}

/// Every destination the app's routers hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppDestination {
    /// A screen of the profile section.
    Profile(ProfileDestination),
    /// A screen of the random section.
    Random(RandomDestination),
}

impl AppDestination {
    /// Profile screen for `user_id`.
    pub fn profile_details(user_id: impl Into<String>) -> Self {
        Self::Profile(ProfileDestination::Details {
            user_id: user_id.into(),
        })
    }

    /// Full-name screen for `user_id`.
    pub fn profile_full_name(user_id: impl Into<String>) -> Self {
        Self::Profile(ProfileDestination::FullName {
            user_id: user_id.into(),
        })
    }
}

impl Resolvable for AppDestination {
    fn unwrapped(&self) -> Option<&dyn Resolvable> {
        match self {
            Self::Profile(inner) => Some(inner),
            Self::Random(inner) => Some(inner),
        }
    }
}

/// A person in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable lookup key.
    pub id: String,
    /// Display name.
    pub full_name: String,
}

/// In-memory person directory.
#[derive(Debug, Clone, Default)]
pub struct PersonStore {
    persons: Vec<Person>,
}

impl PersonStore {
    /// The three people the example ships with.
    pub fn sample() -> Self {
        let person = |id: &str, full_name: &str| Person {
            id: id.to_owned(),
            full_name: full_name.to_owned(),
        };
        Self {
            persons: vec![
                person("42", "Ada Lovelace"),
                person("7", "Grace Hopper"),
                person("3", "Alan Turing"),
            ],
        }
    }

    /// Everyone, in insertion order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// The person with `id`.
    pub fn find(&self, id: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }
}
