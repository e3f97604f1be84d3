mod settings;
mod ticket;
