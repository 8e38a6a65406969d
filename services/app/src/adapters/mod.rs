pub mod json_file;
pub mod memory;
pub mod password;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use password::Argon2Scheme;
