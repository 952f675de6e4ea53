//! Group Registry Module
//!
//! Name-addressable collection of cache groups.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::group::Group;

// == Group Registry ==
/// Maps group names to shared [`Group`] instances.
///
/// The registry's lock only guards the name map; each group keeps its own
/// cache lock, so lookups here never contend with cache traffic.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: RwLock<HashMap<String, Arc<Group>>>,
}

impl GroupRegistry {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Register ==
    /// Adds `group` under its own name and returns the shared handle.
    ///
    /// A group already registered under that name is replaced.
    pub fn register(&self, group: Group) -> Arc<Group> {
        let group = Arc::new(group);
        let previous = self
            .groups
            .write()
            .insert(group.name().to_string(), Arc::clone(&group));

        if previous.is_some() {
            warn!(group = %group.name(), "replaced existing cache group");
        } else {
            info!(group = %group.name(), "registered cache group");
        }
        group
    }

    // == Get ==
    /// Looks up a group by name.
    pub fn get(&self, name: &str) -> Option<Arc<Group>> {
        self.groups.read().get(name).cloned()
    }

    // == Names ==
    /// Returns the registered group names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.read().keys().cloned().collect();
        names.sort();
        names
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.groups.read().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.groups.read().is_empty()
    }
}
