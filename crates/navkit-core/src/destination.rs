//! # Destination Value Model
//!
//! Destinations are plain immutable values. A section declares an enum of
//! its targets; composite destinations embed another section's enum:
//!
//! ```
//! use navkit_core::{AsAny, Resolvable, TypeTag};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum ProfileDestination {
//!     Details { user_id: String },
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum AppDestination {
//!     Profile(ProfileDestination),
//! }
//!
//! impl Resolvable for ProfileDestination {}
//!
//! // Recursive: the registry may look through the wrapper.
//! impl Resolvable for AppDestination {
//!     fn unwrapped(&self) -> Option<&dyn Resolvable> {
//!         match self {
//!             AppDestination::Profile(inner) => Some(inner),
//!         }
//!     }
//! }
//!
//! let dest = AppDestination::Profile(ProfileDestination::Details { user_id: "42".into() });
//! let inner = dest.unwrapped().unwrap();
//! assert_eq!(inner.type_tag(), TypeTag::of::<ProfileDestination>());
//! ```
//!
//! ## Type Identity
//!
//! [`TypeTag`] is the runtime identity used by the registry. It compares by
//! `TypeId` only; the type name is carried for diagnostics.

use std::any::{Any, TypeId};
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// Bound satisfied by every value a `Router` can hold.
///
/// Blanket-implemented; there is nothing to implement by hand.
pub trait Destination: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Destination for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// Stable runtime type identity.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// The tag of type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, for diagnostics only.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Type-erasure helpers available on every `'static` type.
pub trait AsAny: Any {
    /// Borrow as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Runtime identity of the concrete type.
    fn type_tag(&self) -> TypeTag;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<T>()
    }
}

/// A value the destination registry can resolve.
///
/// Implement with an empty body for leaf destinations. Wrapper destinations
/// declare themselves recursive by overriding [`Resolvable::unwrapped`].
pub trait Resolvable: AsAny + Debug + Send + Sync {
    /// The wrapped destination, if this value is a wrapper.
    fn unwrapped(&self) -> Option<&dyn Resolvable> {
        None
    }

    /// Whether this value exposes a wrapped destination.
    fn is_recursive(&self) -> bool {
        self.unwrapped().is_some()
    }
}
