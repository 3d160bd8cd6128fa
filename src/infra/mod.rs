//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка (системный, детерминированный, скриптованный).

pub mod rng;

pub use rng::*;
