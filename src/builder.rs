use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::group::Group;
use crate::loader::Loader;

/// Builder for configuring a [`Group`].
///
/// A group cannot exist without a loader: `build` fails immediately when
/// none was supplied.
///
/// # Example
///
/// ```
/// use neoncache::GroupBuilder;
///
/// let group = GroupBuilder::new("scores")
///     .cache_bytes(2 << 10)
///     .loader(|key: &str| -> anyhow::Result<Vec<u8>> { Ok(key.as_bytes().to_vec()) })
///     .build()
///     .unwrap();
///
/// assert_eq!(group.get("Tom").unwrap().as_string(), "Tom");
/// ```
pub struct GroupBuilder {
    name: String,
    cache_bytes: u64,
    loader: Option<Arc<dyn Loader>>,
}

impl GroupBuilder {
    /// Create a builder for a group called `name` with an unbounded cache.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cache_bytes: 0,
            loader: None,
        }
    }

    /// Create a builder seeded from a [`Config`].
    pub fn from_config(name: impl Into<String>, config: &Config) -> Self {
        Self::new(name).cache_bytes(config.cache_bytes)
    }

    /// Set the byte budget. `0` means unbounded.
    pub fn cache_bytes(mut self, cache_bytes: u64) -> Self {
        self.cache_bytes = cache_bytes;
        self
    }

    /// Set the loader consulted on a miss.
    pub fn loader<L: Loader + 'static>(mut self, loader: L) -> Self {
        self.loader = Some(Arc::new(loader));
        self
    }

    /// Set a loader that is already shared elsewhere.
    pub fn shared_loader(mut self, loader: Arc<dyn Loader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Build the group.
    ///
    /// Fails with [`CacheError::Configuration`] if no loader was set.
    pub fn build(self) -> Result<Group> {
        let loader = self.loader.ok_or_else(|| {
            CacheError::Configuration(format!("group {:?} has no loader", self.name))
        })?;

        info!(group = %self.name, cache_bytes = self.cache_bytes, "cache group created");
        Ok(Group::new(self.name, self.cache_bytes, loader))
    }
}
