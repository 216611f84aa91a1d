mod corpus;
mod kv_store;

pub use corpus::ICorpusSource;
pub use kv_store::IKeyValueStore;
