pub mod competitions;
pub mod health;
