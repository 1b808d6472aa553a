pub mod auth_handler;

pub use auth_handler::{__path_get_me, get_me};
