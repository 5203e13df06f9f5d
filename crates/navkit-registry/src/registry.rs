//! # Destination Resolution
//!
//! Maps a destination's runtime type to a function producing the rendering
//! layer's value for it. Sections register resolvers for their own enums;
//! the app resolves any destination without knowing which section owns it.
//!
//! ## Resolution Order
//!
//! 1. A value that already is a `V` is returned as-is.
//! 2. A resolver registered for the value's [`TypeTag`] is invoked.
//! 3. A wrapper (see [`Resolvable::unwrapped`]) is resolved through its
//!    inner value, provided the inner value has a different type.
//! 4. Anything else yields [`Placeholder::NotFound`].
//!
//! Step 3 requires strict type progress, so a value that unwraps to its own
//! type terminates at step 4. Chains of distinct wrapper types are also cut
//! off after [`MAX_UNWRAP_DEPTH`] levels.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use navkit_core::{Resolvable, TypeTag};

use crate::renderable::{Placeholder, Renderable};

/// Longest chain of wrapper destinations `resolve` follows.
pub const MAX_UNWRAP_DEPTH: usize = 32;

/// A type-erased resolver for one destination type.
///
/// Cheap to clone. Calling it with a value of any other type yields
/// [`Placeholder::TypeMismatch`].
pub struct Resolver<V> {
    tag: TypeTag,
    call: Arc<dyn Fn(&dyn Any) -> V + Send + Sync>,
}

impl<V> Clone for Resolver<V> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag,
            call: Arc::clone(&self.call),
        }
    }
}

impl<V> std::fmt::Debug for Resolver<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver").field("tag", &self.tag).finish()
    }
}

impl<V: Renderable> Resolver<V> {
    fn new<T: Any>(resolve: impl Fn(&T) -> V + Send + Sync + 'static) -> Self {
        let tag = TypeTag::of::<T>();
        Self {
            tag,
            call: Arc::new(move |value: &dyn Any| match value.downcast_ref::<T>() {
                Some(typed) => resolve(typed),
                None => {
                    tracing::warn!(expected = %tag, "resolver received a value of another type");
                    V::placeholder(Placeholder::TypeMismatch { type_name: tag.name() })
                }
            }),
        }
    }

    /// The destination type this resolver accepts.
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Resolve `value`.
    pub fn call(&self, value: &dyn Any) -> V {
        (self.call)(value)
    }
}

/// Registry of destination resolvers producing `V`.
///
/// Cheap to clone; clones share the same resolvers. Resolvers live as long
/// as the registry: they can be overwritten but not removed.
pub struct DestinationRegistry<V> {
    resolvers: Arc<RwLock<HashMap<TypeTag, Resolver<V>>>>,
}

impl<V> Clone for DestinationRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            resolvers: Arc::clone(&self.resolvers),
        }
    }
}

impl<V> Default for DestinationRegistry<V> {
    fn default() -> Self {
        Self {
            resolvers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<V> std::fmt::Debug for DestinationRegistry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let resolvers = self.resolvers.read();
        let mut types: Vec<&'static str> = resolvers.keys().map(TypeTag::name).collect();
        types.sort_unstable();
        f.debug_struct("DestinationRegistry")
            .field("types", &types)
            .finish()
    }
}

impl<V: Renderable> DestinationRegistry<V> {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the resolver for destinations of type `T`, replacing any
    /// previous one.
    pub fn register<T: Any>(&self, resolve: impl Fn(&T) -> V + Send + Sync + 'static) {
        let resolver = Resolver::new(resolve);
        let tag = resolver.tag();
        if self.resolvers.write().insert(tag, resolver).is_some() {
            tracing::debug!(destination = %tag, "replaced destination resolver");
        } else {
            tracing::debug!(destination = %tag, "registered destination resolver");
        }
    }

    /// Whether a resolver is registered for `T`.
    pub fn contains<T: Any>(&self) -> bool {
        self.resolvers.read().contains_key(&TypeTag::of::<T>())
    }

    /// Number of registered destination types.
    pub fn len(&self) -> usize {
        self.resolvers.read().len()
    }

    /// Whether no resolver is registered.
    pub fn is_empty(&self) -> bool {
        self.resolvers.read().is_empty()
    }

    /// The resolver registered for `T`.
    pub fn resolver<T: Any>(&self) -> Option<Resolver<V>> {
        self.resolvers.read().get(&TypeTag::of::<T>()).cloned()
    }

    /// Resolve `destination` to a renderable value. Never fails; misses
    /// produce a placeholder.
    pub fn resolve(&self, destination: &dyn Resolvable) -> V {
        self.resolve_at(destination, 0)
    }

    fn resolve_at(&self, destination: &dyn Resolvable, depth: usize) -> V {
        let tag = destination.type_tag();

        if let Some(value) = destination.as_any().downcast_ref::<V>() {
            return value.clone();
        }

        // Clone out so the resolver runs without the lock held.
        let resolver = self.resolvers.read().get(&tag).cloned();
        if let Some(resolver) = resolver {
            return resolver.call(destination.as_any());
        }

        if let Some(inner) = destination.unwrapped() {
            let inner_tag = inner.type_tag();
            if inner_tag == tag {
                tracing::warn!(destination = %tag, "destination unwraps to its own type");
            } else if depth >= MAX_UNWRAP_DEPTH {
                tracing::warn!(destination = %tag, depth, "unwrap depth limit reached");
            } else {
                tracing::trace!(destination = %tag, inner = %inner_tag, "resolving wrapped destination");
                return self.resolve_at(inner, depth + 1);
            }
        }

        tracing::debug!(destination = %tag, "no resolver for destination");
        V::placeholder(Placeholder::NotFound { type_name: tag.name() })
    }
}
