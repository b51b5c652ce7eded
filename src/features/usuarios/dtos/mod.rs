mod usuario_dto;

pub use usuario_dto::{CreateUsuarioDto, LoginRequestDto, UsuarioResponseDto};
