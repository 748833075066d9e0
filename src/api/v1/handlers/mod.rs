pub mod health;
pub mod hello;
pub mod protected;
