pub mod contact;
pub mod error;
pub mod injector;
pub mod logger;
pub mod script;
