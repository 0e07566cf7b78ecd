pub mod demo;
pub mod lint;
