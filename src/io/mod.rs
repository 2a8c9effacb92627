//! I/O utilities for container decoding
//!
//! This module provides bounds-checked reading over in-memory streams.

pub mod byte_reader;
