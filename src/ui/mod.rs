pub mod canvas;
pub mod panels;
