use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A test type which counts the number of times it has been dropped via a
/// shared counter.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A test type whose [`Clone`] impl panics once a shared fuse runs out,
/// simulating an element operation that fails partway through a bulk fill.
///
/// Each instance also carries a [`CountedDrop`], so tests can verify that
/// every successfully produced clone is destroyed during unwinding.
#[derive(Debug)]
pub struct PanicOnClone {
    pub value: usize,
    fuse: Rc<RefCell<usize>>,
    drops: CountedDrop,
}

impl PanicOnClone {
    pub fn new(value: usize, clones_allowed: usize, drops: &CountedDrop) -> PanicOnClone {
        PanicOnClone {
            value,
            fuse: Rc::new(RefCell::new(clones_allowed)),
            drops: drops.clone(),
        }
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        self.fuse.replace_with(|remaining| {
            remaining.checked_sub(1).expect("clone fuse burnt out")
        });
        PanicOnClone {
            value: self.value,
            fuse: self.fuse.clone(),
            drops: self.drops.clone(),
        }
    }
}

impl PartialEq for PanicOnClone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
