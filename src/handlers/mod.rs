pub mod helpers;
pub mod login;
