pub mod achievements;
pub mod catalog;
pub mod cli;
pub mod kv;
pub mod logger;
pub mod model;
pub mod progress;
pub mod report;
pub mod session;
pub mod state;
pub mod term;
pub mod timer;
pub mod toast;
pub mod tui;
pub mod ui;
pub mod util;
pub mod validate;
pub mod widgets;
