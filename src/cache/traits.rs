use async_trait::async_trait;

/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// The backend failed to answer; callers decide how to degrade.
    ExistsButNoValue,
}

/// String-keyed object cache.
///
/// The only production consumer is the JWT revocation blocklist, which
/// stores `revoked:{jti}` markers until the token would have expired
/// anyway.
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// `ttl` is in seconds; 0 means the backend default.
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}
