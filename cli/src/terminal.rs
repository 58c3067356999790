pub mod colors;
pub mod logging;
pub mod print;
pub mod reporter;
pub mod spinner;
