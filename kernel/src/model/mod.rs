pub mod guest;
pub mod id;
