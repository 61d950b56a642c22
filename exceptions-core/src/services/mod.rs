//! 业务服务

mod exceptions_service;

pub use exceptions_service::ExceptionsService;
