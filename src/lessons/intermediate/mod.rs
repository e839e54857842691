pub mod accessors;
pub mod builders;
pub mod closures;
pub mod collect_patterns;
pub mod collections;
pub mod derived_structs;
pub mod guards;
pub mod iterator_adapters;
pub mod iterators;
pub mod operators;
pub mod recoverable_errors;
pub mod text_patterns;
pub mod traits_and_dispatch;
