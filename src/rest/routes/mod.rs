pub mod export;
pub mod health;
pub mod history;
pub mod interview;
pub mod resources;
