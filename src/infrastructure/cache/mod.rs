mod memory_cache_store;

pub use memory_cache_store::MemoryCacheStore;
