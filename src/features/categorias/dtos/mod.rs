mod categoria_dto;

pub use categoria_dto::{CategoriaResponseDto, CreateCategoriaDto};
