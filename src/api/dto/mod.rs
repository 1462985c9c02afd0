pub mod greeting;
pub mod health;
pub mod info;
pub mod not_found;
pub mod root;
pub mod users;
