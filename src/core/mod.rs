pub mod category;
pub mod fallback;
pub mod generator;
pub mod pools;
pub mod random;
pub mod template;
