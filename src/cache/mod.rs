//! Pluggable cache backends.
//!
//! Backends register themselves by name at program start through
//! [`declare_object_cache_plugin`]; startup picks one by configuration and
//! falls back to the in-memory backend.

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// Registers a cache backend under a name.
///
/// The wrapped type must provide `fn new() -> Result<Self, String>`.
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$cache_type>::new()
                            .map_err($crate::errors::TutorHubError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
