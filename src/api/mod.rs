//! Внешний API реплея – то, что отдаётся рендеру.
//!
//! Здесь описываются:
//! - DTO (dto.rs) – удобные структуры для фронта;
//! - проекция (projection.rs) – снэпшот реплея → DTO стола.

pub mod dto;
pub mod projection;

pub use dto::*;
pub use projection::*;
