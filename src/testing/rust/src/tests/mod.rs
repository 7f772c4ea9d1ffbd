/* src/testing/rust/src/tests/mod.rs */

mod sources;
