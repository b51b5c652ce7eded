pub mod comentario_handler;

pub use comentario_handler::*;
