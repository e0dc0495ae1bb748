pub mod form;
pub mod style;
