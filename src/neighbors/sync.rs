//! Thread-safety bounds that only bind with the `parallel` feature.
//!
//! With `parallel` enabled, [`MaybeSend`] and [`MaybeSync`] are `Send` and
//! `Sync`. Without it they are implemented for every type, so sequential
//! callers may pass triangulations that are not thread-safe.

/// `Send` when the `parallel` feature is enabled, otherwise no bound.
#[cfg(feature = "parallel")]
pub trait MaybeSend: Send {}
#[cfg(feature = "parallel")]
impl<T: Send + ?Sized> MaybeSend for T {}

/// `Send` when the `parallel` feature is enabled, otherwise no bound.
#[cfg(not(feature = "parallel"))]
pub trait MaybeSend {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSend for T {}

/// `Sync` when the `parallel` feature is enabled, otherwise no bound.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}
#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> MaybeSync for T {}

/// `Sync` when the `parallel` feature is enabled, otherwise no bound.
#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSync for T {}
