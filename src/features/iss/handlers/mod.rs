mod collect_handler;

pub use collect_handler::*;
