// lib.rs - Library root for the jotpad editor

pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod keymap;
pub mod mode;
pub mod prompt;
pub mod session;
pub mod storage;
pub mod ui;
pub mod viewport;
