/// Line group construction per category
pub mod builder;
/// Generation entry points and the sampled document
pub mod executor;
/// Parameter record, layout modes and group apportioning
pub mod parameters;
