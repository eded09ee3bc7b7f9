pub mod greeting;
pub mod history;
