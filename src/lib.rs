pub mod icon_gen;
pub mod manifest;
pub mod render;
