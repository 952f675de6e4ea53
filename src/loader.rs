//! Loader Module
//!
//! The data source a group falls back to on a cache miss.

use std::fmt;

// == Loader ==
/// Produces the source bytes for a key that is not cached.
///
/// Any `Fn(&str) -> anyhow::Result<Vec<u8>>` closure is a loader.
///
/// # Example
///
/// ```
/// use neoncache::Loader;
///
/// let loader = |key: &str| -> anyhow::Result<Vec<u8>> { Ok(key.as_bytes().to_vec()) };
/// assert_eq!(loader.get("abc").unwrap(), b"abc".to_vec());
/// ```
pub trait Loader: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Vec<u8>>;
}

impl<F> Loader for F
where
    F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    fn get(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        self(key)
    }
}

// == Loader Fn ==
/// Named wrapper turning a closure into a [`Loader`].
///
/// Useful where a concrete, nameable loader type is wanted.
pub struct LoaderFn<F>(pub F);

impl<F> Loader for LoaderFn<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    fn get(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        (self.0)(key)
    }
}

impl<F> fmt::Debug for LoaderFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoaderFn")
    }
}
