//! Tests for the container parser

pub(crate) mod test_utils;
