//! Process-wide registry instances, one per renderable type.
//!
//! Initialized explicitly at startup with [`init_global`], then reached from
//! anywhere with [`global`]. Tests call [`reset_global`] between cases.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::error::RegistryError;
use crate::registry::DestinationRegistry;
use crate::renderable::Renderable;

type Globals = RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>;

static GLOBALS: OnceLock<Globals> = OnceLock::new();

fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Create the process-wide registry for `V`.
pub fn init_global<V: Renderable>() -> Result<DestinationRegistry<V>, RegistryError> {
    let mut map = globals().write();
    let key = TypeId::of::<V>();
    if map.contains_key(&key) {
        return Err(RegistryError::AlreadyInitialized {
            type_name: std::any::type_name::<V>(),
        });
    }
    let registry = DestinationRegistry::<V>::new();
    map.insert(key, Box::new(registry.clone()));
    tracing::debug!(renderable = std::any::type_name::<V>(), "global destination registry initialized");
    Ok(registry)
}

/// The process-wide registry for `V`.
pub fn global<V: Renderable>() -> Result<DestinationRegistry<V>, RegistryError> {
    globals()
        .read()
        .get(&TypeId::of::<V>())
        .and_then(|entry| entry.downcast_ref::<DestinationRegistry<V>>())
        .cloned()
        .ok_or_else(|| RegistryError::NotInitialized {
            type_name: std::any::type_name::<V>(),
        })
}

/// Drop the process-wide registry for `V`. Returns whether one existed.
///
/// Handles obtained earlier keep working but are detached from the global.
pub fn reset_global<V: Renderable>() -> bool {
    let removed = globals().write().remove(&TypeId::of::<V>()).is_some();
    if removed {
        tracing::debug!(renderable = std::any::type_name::<V>(), "global destination registry reset");
    }
    removed
}
