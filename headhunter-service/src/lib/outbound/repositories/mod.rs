pub mod headhunter;
pub mod in_memory;

pub use headhunter::PostgresHeadhunterDirectory;
pub use in_memory::InMemoryHeadhunterDirectory;
