mod repository;
mod store;

pub use repository::WorkoutRepository;
pub use store::{KeyValueStore, MemoryStore};
