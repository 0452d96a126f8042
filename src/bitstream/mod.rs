//! The bitstream module forms the I/O subsystem for the twinpack compression tool.
//!
//! Both compression methods are stream-oriented: they pull bytes from a source and
//! push bytes to a sink, one codec stage at a time.
//!
//! The pieces are:
//! - bytereader: Buffered byte and chunk reads over any I/O source that supports the read() call.
//! - pack12: Conversion between 12-bit dictionary codes and the 8-bit bytes they travel in.
//!
//! This I/O subsystem is designed to efficiently interface with the other modules within
//! twinpack. It is not intended for more general use.
//!
pub mod bytereader;
pub mod pack12;
