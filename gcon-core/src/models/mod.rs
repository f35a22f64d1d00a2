pub mod annotation;
pub mod variant;
pub mod variant_type;

// re-export for cleaner imports
pub use self::annotation::Annotation;
pub use self::variant::{Variant, VariantBuilder};
pub use self::variant_type::VariantType;
