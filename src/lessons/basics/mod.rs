pub mod files;
pub mod greeting;
pub mod structs_and_methods;
pub mod vectors_and_loops;
