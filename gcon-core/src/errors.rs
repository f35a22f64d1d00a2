use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VariantError {
    #[error("missing ref_prev: the reference base preceding the variant is required")]
    MissingRefPrev,

    #[error("missing read_prev: the read base preceding the variant is required")]
    MissingReadPrev,

    #[error("missing required variant field: {0}")]
    MissingField(&'static str),
}

#[derive(Error, Debug)]
pub enum FilterConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type FilterConfigResult<T> = std::result::Result<T, FilterConfigError>;
