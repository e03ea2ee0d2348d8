use derive_more::{Display, Error};

/// The error produced by checked element access with an index outside the
/// initialized range of a collection.
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The number of elements in the collection at the time of access.
    pub len: usize,
}

/// The error produced when a requested allocation would exceed [`isize::MAX`]
/// bytes.
#[derive(Debug, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
