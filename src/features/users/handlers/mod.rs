pub mod register_handler;

pub use register_handler::{__path_register, register};
