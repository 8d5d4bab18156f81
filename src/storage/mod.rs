// Persistence for trainer state - whole-file JSON with atomic replace
pub mod json_ops;
pub mod trainer_store;

pub use json_ops::{read_json_file, write_json_file, StorageError};
pub use trainer_store::TrainerStore;
