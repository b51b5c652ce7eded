mod comentario_dto;

pub use comentario_dto::{ComentarioResponseDto, CreateComentarioDto};
