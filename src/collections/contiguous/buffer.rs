use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An owned, untracked heap allocation of `size` slots of `T`.
///
/// This is the single allocation primitive underneath
/// [`DynamicArray`](super::DynamicArray): it knows how to allocate an exact
/// number of slots and how to free them, and nothing else. In particular it
/// never reads or drops the slots it owns - the collection on top is
/// responsible for element lifetimes and always instantiates this type at
/// `MaybeUninit<T>`.
///
/// A buffer of size 0 (or of a zero-sized `T`) owns no allocation at all and
/// holds a dangling pointer.
pub(crate) struct RawBuffer<T> {
    pub(crate) ptr: NonNull<T>,
    size: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a buffer of size 0, without allocating.
    pub(crate) const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a buffer of exactly `size` slots. The slots are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if the memory layout would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn with_size(size: usize) -> RawBuffer<T> {
        let layout = Self::make_layout(size);

        RawBuffer {
            ptr: Self::make_ptr(layout),
            size,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots the buffer owns.
    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    /// A helper function to create a [`Layout`] containing `size` number of
    /// elements of type `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`].
    /// Returns a dangling pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls
    /// [`alloc::handle_alloc_error`] as recommended, to avoid new allocations
    /// rather than panicking.
    fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.size);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and
            // layout is the same as when allocated. Zero-sized layouts aren't
            // allocated and are guarded against deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}
