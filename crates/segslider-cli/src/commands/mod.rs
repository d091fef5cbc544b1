pub mod config;
pub mod layout;
pub mod map;
pub mod run;
