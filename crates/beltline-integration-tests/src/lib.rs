//! Cross-crate integration tests live in `tests/`. This library target is
//! intentionally empty.
