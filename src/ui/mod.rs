pub mod app_shell;
pub mod birds_page;
pub mod layout;
pub mod theme;
pub mod tiles;
