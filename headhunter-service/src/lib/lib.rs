pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::headhunter;
pub use outbound::repositories;
