mod usuario_service;

pub use usuario_service::UsuarioService;
