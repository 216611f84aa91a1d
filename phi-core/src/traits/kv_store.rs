use crate::errors::PhiResult;

/// String-keyed persistence for serialized blobs.
///
/// The detector owns the shape of every value; implementations store them
/// opaquely.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> PhiResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PhiResult<()>;
    fn delete(&self, key: &str) -> PhiResult<()>;
}
