//! Process-wide mapping from node type names to numeric identifiers.
//!
//! Built-in names hold ids 1 to 27 in declaration order. Any other name is
//! assigned the next free id the first time it is looked up, and keeps it for
//! the life of the process.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use super::node_type::BUILTIN_NAMES;

static REGISTRY: OnceLock<RwLock<HashMap<String, u32>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, u32>> {
    REGISTRY.get_or_init(|| {
        let seeded = BUILTIN_NAMES
            .iter()
            .zip(1u32..)
            .map(|(name, id)| (name.to_string(), id))
            .collect();
        RwLock::new(seeded)
    })
}

/// Returns the id for `name`, registering it if unseen.
pub fn type_id_for_name(name: &str) -> u32 {
    if let Some(id) = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
    {
        return *id;
    }

    let mut map = registry().write().unwrap_or_else(PoisonError::into_inner);
    let next = map.len() as u32 + 1;
    *map.entry(name.to_string()).or_insert(next)
}

/// Reverse lookup of a previously assigned id.
pub fn name_for_type_id(id: u32) -> Option<String> {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find_map(|(name, v)| (*v == id).then(|| name.clone()))
}
