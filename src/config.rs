use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Instruction prepended to every model call. Keeps the assistant persona
/// and, crucially, the labeled reply template the extractor depends on.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
Você é um assistente financeiro pessoal inteligente. Seu papel é ajudar o usuário a entender e controlar sua vida financeira.

1. Se a mensagem parecer uma movimentação (ex: \"Mercado 120\", \"Recebi 1000\"), extraia:
  - Valor
  - Descrição
  - Categoria (ex: Alimentação, Transporte, Lazer, etc.)
  - Tipo: Despesa ou Receita
  - Data (assuma hoje no formato dd/mm/yyyy)

2. Retorne isso em formato:
✅ Nova movimentação **registrada**!

💸 Tipo: ...
🧾 Item: ...
🗂️ Categoria: ...
💰 Valor: ...
📅 Data: ...

💡 Dica: ...

3. Se for uma pergunta, responda como um consultor financeiro amigável e didático.

Use sempre emojis e linguagem clara e leve. Se não entender a mensagem, peça para reformular.
";

fn default_database_path() -> String {
    "core_db.db".to_string()
}

fn default_max_history() -> usize {
    10
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

/// Application configuration. Every field has a default, so an empty TOML
/// file (or [`AppConfig::default`]) is a working configuration.
#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Path of the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// How many recent conversation turns are sent back to the model.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// System instruction prepended to every model call.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            max_history: default_max_history(),
            system_prompt: default_system_prompt(),
        }
    }
}

/// Loads the configuration from a TOML file.
///
/// # Errors
///
/// Returns `Error::Config` if the file cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref)
        .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path_ref, e)))?;
    let app_config: AppConfig = toml::from_str(&contents).map_err(|e| {
        Error::Config(format!(
            "Failed to parse TOML from config file {:?}: {}",
            path_ref, e
        ))
    })?;
    Ok(app_config)
}
