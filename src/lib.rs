//! A resizable contiguous collection with an explicit memory-management
//! discipline.
//!
//! # Purpose
//! This crate provides [`DynamicArray`](collections::contiguous::DynamicArray),
//! a growable array in the spirit of [`Vec`], written from the allocator up.
//! The interesting part isn't the API surface (which is deliberately
//! conventional) but the buffer lifecycle behind it: every capacity change
//! allocates a fresh buffer, transfers the live elements and only then
//! releases the old allocation, so a failure at any point leaves the
//! collection exactly as it was.
//!
//! # Error Handling
//! Most methods panic rather than return errors, because users don't want to
//! handle a capacity overflow on every push. Where a failure is a reasonable
//! part of control flow (checked element access), methods return strongly
//! typed errors instead. Either way, a panic that unwinds out of any method
//! leaves the collection valid and unchanged: partially produced elements are
//! dropped and replacement buffers are discarded before they are ever
//! adopted.
//!
//! # Dependencies
//! The collection itself is written against `std` alone - no [`Vec`] or other
//! std collections under the hood. The error types lean on derive macros
//! because hand-writing `Display` and `Error` impls is very repetitive
//! programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
