pub mod advanced;
pub mod basics;
pub mod intermediate;

use crate::domain::ports::Lesson;

/// The built-in lessons in suggested reading order. The order is pedagogical;
/// every lesson stands alone.
pub fn catalog() -> Vec<Box<dyn Lesson>> {
    vec![
        Box::new(basics::greeting::Greeting),
        Box::new(basics::structs_and_methods::StructsAndMethods),
        Box::new(basics::vectors_and_loops::VectorsAndLoops),
        Box::new(basics::files::Files::new()),
        Box::new(intermediate::closures::Closures),
        Box::new(intermediate::iterators::Iterators),
        Box::new(intermediate::iterator_adapters::IteratorAdapters),
        Box::new(intermediate::collections::Collections),
        Box::new(intermediate::collect_patterns::CollectPatterns),
        Box::new(intermediate::operators::Operators),
        Box::new(intermediate::traits_and_dispatch::TraitsAndDispatch),
        Box::new(intermediate::derived_structs::DerivedStructs),
        Box::new(intermediate::accessors::Accessors),
        Box::new(intermediate::builders::Builders),
        Box::new(intermediate::guards::Guards),
        Box::new(intermediate::text_patterns::TextPatterns),
        Box::new(intermediate::recoverable_errors::RecoverableErrors),
        Box::new(advanced::async_tasks::AsyncTasks),
        Box::new(advanced::generics::Generics),
        Box::new(advanced::smart_pointers::SmartPointers),
    ]
}
