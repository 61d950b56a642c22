//! Storage layer abstraction trait definition

mod exceptions_repository;

pub use exceptions_repository::ExceptionsRepository;
