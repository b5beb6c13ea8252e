// HTTP handlers

pub mod links;
