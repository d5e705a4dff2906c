//! Инфраструктурный слой вокруг движка реплея:
//! - загрузка записи игры (текстовый формат считывателя / JSON).

pub mod record;

pub use record::*;
