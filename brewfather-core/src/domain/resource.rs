use serde::de::DeserializeOwned;

/// A document type served by one upstream resource collection.
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Collection path below the API base endpoint, e.g. `inventory/hops`
    const PATH: &'static str;
    /// Human readable name used in error messages
    const KIND: &'static str;
}

macro_rules! resource {
    ($ty:ty, category = $category:expr) => {
        resource!($ty, $category.path(), $category.noun());
    };
    ($ty:ty, $path:expr, $kind:expr) => {
        impl $crate::domain::Resource for $ty {
            const PATH: &'static str = $path;
            const KIND: &'static str = $kind;
        }
    };
}

pub(crate) use resource;
