pub mod add_shortcut_dialog;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod report;
pub mod report_window;
pub mod settings;
pub mod shortcuts;
pub mod week;
