use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::greeting;
use crate::utils::error::{GreeterError, Result};

fn default_language() -> String {
    "English".to_string()
}

/// A named individual with a language preference. Immutable after
/// construction; read access goes through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    #[serde(default = "default_language")]
    language: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: default_language(),
        }
    }

    pub fn with_language(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Renders the greeting sentence for this person's language.
    pub fn greeting(&self) -> Result<String> {
        match greeting::template_for(&self.language) {
            Some(template) => {
                debug!("Rendering {} greeting for {}", self.language, self.name);
                Ok(greeting::render(template, &self.name))
            }
            None => {
                warn!("Unsupported greeting language: {}", self.language);
                Err(GreeterError::UnsupportedLanguage {
                    language: self.language.clone(),
                })
            }
        }
    }
}
