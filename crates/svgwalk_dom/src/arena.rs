//! Arena allocator for document nodes.
//!
//! Uses `bumpalo` for efficient bump allocation. All nodes of a single
//! document are allocated in the same arena and freed together once no
//! traversal references them anymore.

use bumpalo::Bump;

/// Arena allocator for document nodes.
///
/// This struct wraps `bumpalo::Bump` to provide arena allocation for
/// [`Node`](crate::Node) values and their string/slice payloads. Using
/// arena allocation:
///
/// - Minimizes allocation overhead during document construction
/// - Improves cache locality for traversal
/// - Enables batch deallocation when the document is dropped
///
/// # Example
///
/// ```rust
/// use svgwalk_dom::Arena;
///
/// let arena = Arena::new();
///
/// let value = arena.alloc(42u32);
/// assert_eq!(*value, 42);
///
/// let s = arena.alloc_str("r1");
/// assert_eq!(s, "r1");
/// ```
pub struct Arena {
    bump: Bump,
}

impl Arena {
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

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
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

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Resets the arena, deallocating all allocated objects.
    ///
    /// Note: This does NOT call `Drop` for allocated objects. Requires
    /// exclusive access, so no node borrowed from this arena can outlive
    /// the reset.
    #[inline]
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
