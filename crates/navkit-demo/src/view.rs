//! Plain-text stand-in for the rendering layer.

use serde::Serialize;

use navkit_core::Resolvable;
use navkit_registry::{DestinationRegistry, Placeholder, Renderable};

use crate::app::{PersonStore, ProfileDestination, RandomDestination};

/// A rendered screen: a title and body lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextView {
    /// First line, shown bold.
    pub title: String,
    /// Body lines.
    pub lines: Vec<String>,
    /// Set when the view is a resolution placeholder.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_placeholder: bool,
}

impl TextView {
    /// A view with `title` and no body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            is_placeholder: false,
        }
    }

    /// Append a body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

impl Renderable for TextView {
    fn placeholder(placeholder: Placeholder) -> Self {
        let text = placeholder.to_string();
        let mut lines = text.lines().map(str::to_owned);
        Self {
            title: lines.next().unwrap_or_default(),
            lines: lines.collect(),
            is_placeholder: true,
        }
    }
}

impl Resolvable for TextView {}

/// Registry with a resolver for each section's destination enum.
pub fn build_registry(store: PersonStore) -> DestinationRegistry<TextView> {
    let registry = DestinationRegistry::new();
    registry.register(move |dest: &ProfileDestination| profile_view(&store, dest));
    registry.register(|dest: &RandomDestination| match dest {
        RandomDestination::Home => TextView::new("Random").line("Tap to roll a number"),
    });
    registry
}

fn profile_view(store: &PersonStore, dest: &ProfileDestination) -> TextView {
    match dest {
        ProfileDestination::List => store
            .persons()
            .iter()
            .fold(TextView::new("Persons"), |view, p| view.line(&p.full_name)),
        ProfileDestination::Details { user_id } => match store.find(user_id) {
            Some(person) => TextView::new(&person.full_name).line(format!("id: {}", person.id)),
            None => TextView::new("Unknown person").line(format!("id: {user_id}")),
        },
        ProfileDestination::FullName { user_id } => {
            let name = store.find(user_id).map_or("?", |p| p.full_name.as_str());
            TextView::new("Full name").line(name)
        }
    }
}
