pub mod text_options;
