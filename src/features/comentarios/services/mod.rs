mod comentario_service;

pub use comentario_service::ComentarioService;
