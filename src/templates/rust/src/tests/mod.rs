/* src/templates/rust/src/tests/mod.rs */
