use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Unsupported greeting language: {language}")]
    UnsupportedLanguage { language: String },
}

pub type Result<T> = std::result::Result<T, GreeterError>;
