pub mod entities;
pub mod fallback;
