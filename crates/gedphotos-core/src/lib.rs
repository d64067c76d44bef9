pub mod config;
pub mod logging;

pub mod fetch;
pub mod gedcom;
pub mod input;
pub mod person_id;
pub mod photo;
pub mod scanner;
