//! Test utilities for building sessions and classifier output.
