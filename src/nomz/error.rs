use thiserror::Error;

#[derive(Error, Debug)]
pub enum NomzError {
    #[error("Data load error: {0}")]
    DataLoad(String),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(u32),

    #[error("Area not found: {0}")]
    AreaNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, NomzError>;
