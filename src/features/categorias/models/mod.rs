mod categoria;

pub use categoria::Categoria;
