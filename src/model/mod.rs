pub mod configs;
pub mod credential;
