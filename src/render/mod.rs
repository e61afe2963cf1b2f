pub mod formatter;

pub use formatter::LayoutFormatter;
