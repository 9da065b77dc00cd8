//! split/marshaler.rs
//! The capability the splitter needs from a telemetry category.
//!
//! A collection is a borrowed slice of items; length and order-preserving
//! sub-ranges come from the slice itself. A `Marshaler` only knows how to
//! wrap any contiguous sub-range in its category's envelope.

use std::marker::PhantomData;

#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    #[error("{category}: json encoding failed: {source}")]
    Json {
        category: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{category}: payload decoding failed: {source}")]
    Decode {
        category: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{category}: {msg}")]
    Encode { category: &'static str, msg: String },
}

impl MarshalError {
    pub fn json(category: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| MarshalError::Json { category, source }
    }

    pub fn decode(category: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| MarshalError::Decode { category, source }
    }
}

/// Encodes a contiguous run of items into one self-describing envelope.
///
/// Implementations must be pure: the same items always marshal to the same
/// bytes, and marshaling never observes anything outside `items`.
pub trait Marshaler: Sync {
    type Item: Sync;

    /// Category name, used in logs and errors.
    fn category(&self) -> &'static str;

    fn marshal(&self, items: &[Self::Item]) -> Result<Vec<u8>, MarshalError>;
}

impl<M: Marshaler + ?Sized> Marshaler for &M {
    type Item = M::Item;

    fn category(&self) -> &'static str {
        (**self).category()
    }

    fn marshal(&self, items: &[Self::Item]) -> Result<Vec<u8>, MarshalError> {
        (**self).marshal(items)
    }
}

/// Adapts a plain function into a `Marshaler`.
pub struct MarshalFn<T, F> {
    category: &'static str,
    f: F,
    _item: PhantomData<fn(&T)>,
}

impl<T, F> MarshalFn<T, F>
where
    T: Sync,
    F: Fn(&[T]) -> Result<Vec<u8>, MarshalError> + Sync,
{
    pub fn new(category: &'static str, f: F) -> Self {
        Self { category, f, _item: PhantomData }
    }
}

impl<T, F> Marshaler for MarshalFn<T, F>
where
    T: Sync,
    F: Fn(&[T]) -> Result<Vec<u8>, MarshalError> + Sync,
{
    type Item = T;

    fn category(&self) -> &'static str {
        self.category
    }

    fn marshal(&self, items: &[T]) -> Result<Vec<u8>, MarshalError> {
        (self.f)(items)
    }
}
