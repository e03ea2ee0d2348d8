use std::iter::FusedIterator;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ptr;

use super::DynamicArray;
use crate::collections::contiguous::buffer::RawBuffer;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);

        IntoIter {
            // SAFETY: self is wrapped in ManuallyDrop and never touched
            // again, so the buffer keeps exactly one owner.
            buf: unsafe { ptr::read(&this.buf) },
            front: 0,
            back: this.len,
        }
    }
}

/// An owned iterator over the elements of a [`DynamicArray`]. See
/// [`DynamicArray::into_iter`].
///
/// The iterator owns the collection's buffer; unconsumed elements are dropped
/// with it, and the allocation is released when the iterator goes out of
/// scope.
pub struct IntoIter<T> {
    buf: RawBuffer<MaybeUninit<T>>,
    front: usize,
    back: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.front..self.back {
            // SAFETY: The unconsumed slots [front, back) hold initialized
            // values that the iterator owns.
            unsafe { self.buf.ptr.add(i).as_mut().assume_init_drop(); }
        }

        // Implicitly drop self.buf, releasing the allocation.
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            // SAFETY: The slots [front, back) hold initialized values that
            // the iterator owns. front is advanced past the slot immediately,
            // so the value is read exactly once.
            let value = unsafe { self.buf.ptr.add(self.front).read().assume_init() };
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: back has just been decremented, so the slot is within
            // the unconsumed range and holds an initialized value that is
            // read exactly once.
            let value = unsafe { self.buf.ptr.add(self.back).read().assume_init() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}
