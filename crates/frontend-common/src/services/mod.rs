pub mod extension;

pub use extension::get_is_extension_available;
