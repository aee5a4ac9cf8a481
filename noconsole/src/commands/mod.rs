pub mod noconsole;
