pub mod agent;
pub mod ai;
pub mod content;
pub mod health;
pub mod research;
pub mod transcript;
