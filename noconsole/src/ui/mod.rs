pub mod output_format;
pub mod reporter;
pub mod theme;
