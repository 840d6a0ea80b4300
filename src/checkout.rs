pub mod domain;
pub mod command;
pub mod dto;
pub mod factory;
