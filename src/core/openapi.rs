use utoipa::OpenApi;

use crate::core::error::ErrorBody;
use crate::features::categorias::dtos as categorias_dtos;
use crate::features::categorias::handlers::categoria_handler;
use crate::features::comentarios::dtos as comentarios_dtos;
use crate::features::comentarios::handlers::comentario_handler;
use crate::features::tickets::dtos as tickets_dtos;
use crate::features::tickets::handlers::ticket_handler;
use crate::features::tickets::models as tickets_models;
use crate::features::usuarios::dtos as usuarios_dtos;
use crate::features::usuarios::handlers::usuario_handler;
use crate::features::usuarios::models as usuarios_models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Tickets
        ticket_handler::list_tickets,
        ticket_handler::get_ticket,
        ticket_handler::create_ticket,
        ticket_handler::update_ticket,
        ticket_handler::delete_ticket,
        // Comentarios
        comentario_handler::list_comentarios,
        comentario_handler::create_comentario,
        // Categorias
        categoria_handler::list_categorias,
        categoria_handler::get_categoria,
        categoria_handler::create_categoria,
        // Usuarios
        usuario_handler::list_usuarios,
        usuario_handler::get_usuario,
        usuario_handler::create_usuario,
        usuario_handler::login,
    ),
    components(
        schemas(
            ErrorBody,
            // Tickets
            tickets_models::Prioridad,
            tickets_models::Estado,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::UpdateTicketDto,
            tickets_dtos::TicketResponseDto,
            // Comentarios
            comentarios_dtos::CreateComentarioDto,
            comentarios_dtos::ComentarioResponseDto,
            // Categorias
            categorias_dtos::CreateCategoriaDto,
            categorias_dtos::CategoriaResponseDto,
            // Usuarios
            usuarios_models::Rol,
            usuarios_dtos::CreateUsuarioDto,
            usuarios_dtos::LoginRequestDto,
            usuarios_dtos::UsuarioResponseDto,
        )
    ),
    tags(
        (name = "tickets", description = "Support ticket CRUD"),
        (name = "comentarios", description = "Comments on tickets"),
        (name = "categorias", description = "Ticket categories"),
        (name = "usuarios", description = "Users and login"),
    ),
    info(
        title = "Mesa de Ayuda API",
        version = "0.1.0",
        description = "Backend API for the helpdesk ticketing system",
    )
)]
pub struct ApiDoc;
