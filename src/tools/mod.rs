//! The tools module provides several helper functions for the twinpack compression tool.
//!
//! The tools are:
//! - cli: Command line interface for twinpack.
//! - counting_sort: Stable O(n + k) byte sort used to invert the block-sorting transform.
//! - rle: Run-Length-Encoding of the transformed byte stream.
//!
pub mod cli;
pub mod counting_sort;
pub mod rle;
