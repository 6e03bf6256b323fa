pub mod category;
pub mod errors;
pub mod user;
