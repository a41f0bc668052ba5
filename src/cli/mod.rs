//! CLI layer - Command-line interface

pub mod commands;
pub mod menu;
pub mod output;

pub use commands::{Cli, Commands};
pub use menu::Menu;
pub use output::{format_exam_line, format_exam_list};
