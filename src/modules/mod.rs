pub mod achievement;
pub mod blog;
pub mod book;
pub mod catalog;
pub mod profile;
pub mod project;
