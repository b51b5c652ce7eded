pub mod categorias;
pub mod comentarios;
pub mod tickets;
pub mod usuarios;
