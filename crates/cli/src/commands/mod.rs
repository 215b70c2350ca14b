pub mod convert;
pub mod history;
pub mod list;
pub mod selftest;
