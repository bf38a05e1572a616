pub mod resource;
pub mod mutation;
pub mod use_debounce;
pub mod use_me;
pub mod use_config;

pub use resource::{use_resource, FailurePolicy, LoadOptions, ResourceHandle};
pub use mutation::{refresh_on_success, spawn_mutation, spawn_mutation_with, MutationMessages};
pub use use_debounce::use_debounce;
pub use use_me::{capabilities, use_me};
pub use use_config::use_config;
