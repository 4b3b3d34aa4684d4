pub mod error;
pub mod logger;
pub mod scanner;
pub mod validation;
