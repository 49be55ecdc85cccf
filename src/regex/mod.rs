// Compiled-once patterns

#[macro_use]
mod cache;
