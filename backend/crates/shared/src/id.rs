//! Common ID Types
//!
//! Type-safe wrappers around the store's integer row ids.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Row ids are assigned by the store on insert, so there is no `new()`;
/// ids only come from `from_raw` (rows, session tokens).
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from_raw(7);
/// assert_eq!(id.value(), 7);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap an existing row id
    pub const fn from_raw(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying row id
    pub const fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would require the marker type itself to implement them.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_raw(value)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Comment IDs
    pub struct Comment;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type CommentId = Id<markers::Comment>;
