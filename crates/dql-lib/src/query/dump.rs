//! Test-only dump methods for query inspection.
