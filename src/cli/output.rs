pub use shortpath_core::format::OutputFormat;
