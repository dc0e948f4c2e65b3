pub mod option;
pub mod variant;
pub mod error;
pub mod iter;

pub use error::OptionError;
pub use option::Option;
pub use variant::Variant;
