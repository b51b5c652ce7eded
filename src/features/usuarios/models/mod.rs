mod usuario;

pub use usuario::{Rol, Usuario};
