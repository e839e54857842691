pub mod async_tasks;
pub mod generics;
pub mod smart_pointers;
