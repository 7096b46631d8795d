pub mod competition;
pub mod health;
