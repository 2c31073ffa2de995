//! Arena allocator for network nodes.
//!
//! Uses `bumpalo` so that a whole network (nodes, child slices, type tokens
//! and attribute strings) lives in one allocation region and is freed at once.

use bumpalo::Bump;

use crate::TypeToken;

/// Arena allocator for runtime network nodes.
///
/// Every borrowed piece of a [`RuntimeNode`](crate::RuntimeNode) (its
/// children, type names, property names and string literals) is allocated
/// here, which lets nodes be `Copy` and keeps a loaded network in one place.
///
/// # Example
///
/// ```rust
/// use rulegraph_ast::{NetworkArena, TypeToken};
///
/// let arena = NetworkArena::new();
///
/// let name = arena.alloc_str("Order");
/// assert_eq!(name, "Order");
///
/// let pair = arena.pair(TypeToken::named("Order"), TypeToken::named("Customer"));
/// assert_eq!(pair.label().to_string(), "Order,Customer");
/// ```
pub struct NetworkArena {
    bump: Bump,
}

impl NetworkArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Builds a tuple token out of two tokens.
    ///
    /// Outer joins carry such a pair as their output type.
    pub fn pair<'a>(&'a self, left: TypeToken<'a>, right: TypeToken<'a>) -> TypeToken<'a> {
        TypeToken::Tuple(self.alloc_slice_copy(&[left, right]))
    }
}

impl Default for NetworkArena {
    fn default() -> Self {
        Self::new()
    }
}
