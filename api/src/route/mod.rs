pub mod guest;
pub mod health;
pub mod v1;
