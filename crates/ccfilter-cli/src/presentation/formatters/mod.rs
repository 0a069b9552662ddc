pub mod color;
pub mod number;
pub mod text;
pub mod tool;
