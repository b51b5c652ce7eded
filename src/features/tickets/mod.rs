//! Tickets feature: CRUD over support requests.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/tickets` | List tickets |
//! | GET | `/api/tickets/{id}` | Get ticket by id |
//! | POST | `/api/tickets` | Create ticket (estado defaults to ABIERTO) |
//! | PUT | `/api/tickets/{id}` | Full replace of the four mutable fields |
//! | DELETE | `/api/tickets/{id}` | Delete ticket |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TicketService;
