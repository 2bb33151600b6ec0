//! Leave and Tax Rules Engine for an HR platform
//!
//! This crate provides the calculation core behind employee leave requests and
//! payroll tax estimates: per-leave-type eligibility validation, attendance
//! calendar entry checks, and progressive slab-based income tax computation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
