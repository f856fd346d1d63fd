pub mod clear;
pub mod expense;
pub mod import;
pub mod income;
pub mod init;
pub mod plot;
pub mod report;
pub mod rm;
pub mod root;
pub mod sum;
pub mod view;
pub mod years;
