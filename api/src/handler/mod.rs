pub mod guest;
pub mod health;
