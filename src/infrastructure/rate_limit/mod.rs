mod in_memory_rate_limit_store;

pub use in_memory_rate_limit_store::InMemoryRateLimitStore;
