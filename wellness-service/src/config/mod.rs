use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default number of candidates requested from the vector index per query.
const DEFAULT_TOP_K: usize = 15;

#[derive(Debug, Clone, Deserialize)]
pub struct WellnessConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub pinecone: PineconeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    /// Model for plan generation (e.g. gemini-2.0-flash).
    pub text_model: String,
    /// Model for query embeddings (e.g. text-embedding-004).
    pub embedding_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PineconeSettings {
    pub api_key: String,
    /// Full https host of the index, e.g. https://foods-xxxx.svc.pinecone.io
    pub index_host: String,
    pub top_k: usize,
}

impl WellnessConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = common.is_prod();

        Ok(WellnessConfig {
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", None, is_prod)?,
                text_model: get_env("GEMINI_TEXT_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                embedding_model: get_env(
                    "GEMINI_EMBEDDING_MODEL",
                    Some("text-embedding-004"),
                    is_prod,
                )?,
            },
            pinecone: PineconeSettings {
                api_key: get_env("PINECONE_API_KEY", None, is_prod)?,
                index_host: get_env("PINECONE_INDEX_HOST", None, is_prod)?,
                top_k: get_env("RETRIEVAL_TOP_K", Some(&DEFAULT_TOP_K.to_string()), is_prod)?
                    .parse()
                    .unwrap_or(DEFAULT_TOP_K),
            },
            common,
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
