pub mod cleanup;
pub mod selector;
