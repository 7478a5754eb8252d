pub mod path;
pub mod show;
pub mod traverse;
