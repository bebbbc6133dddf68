//! tests/mod.rs
//! Pruebas del almacén y de los endpoints HTTP.

mod store_tests;
