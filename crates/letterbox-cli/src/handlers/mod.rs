pub mod clear;
pub mod demo;
pub mod guidance;
pub mod init;
pub mod list;
pub mod show;
pub mod tui;
pub mod write;
