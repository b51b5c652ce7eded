mod ticket;

pub use ticket::{Estado, Prioridad, Ticket};
