//! End-to-end tests: full command lines against a small populated world,
//! through the public crate surface only.
