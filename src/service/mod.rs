pub mod admission;
pub mod deletion;
pub mod draft;
pub mod notify;
pub mod settings;
pub mod ticket;
pub mod transcript;
