pub mod sqlite;

pub use sqlite::SqliteBoardRepository;
