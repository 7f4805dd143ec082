use config::{Config, ConfigError, Environment as ConfigEnvironment, File};
use std::env;
use std::path::{Path, PathBuf};

/// 選擇運行環境的環境變數
const ENV_KEY: &str = "STOCKBOARD_ENV";
/// 配置文件目錄的環境變數，未設定時取 `config/`
const CONFIG_DIR_KEY: &str = "CONFIG_DIR";

/// 運行環境
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// 從 STOCKBOARD_ENV 讀取運行環境，未設定或無法識別時退回開發環境
    pub fn from_env() -> Self {
        match env::var(ENV_KEY)
            .unwrap_or_else(|_| "development".into())
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// 對應的配置文件名
    pub fn as_filename(&self) -> &'static str {
        match self {
            Environment::Development => "development.toml",
            Environment::Production => "production.toml",
        }
    }

    /// 配置文件完整路徑
    fn config_path(&self) -> PathBuf {
        let config_dir = env::var(CONFIG_DIR_KEY).unwrap_or_else(|_| "config".into());
        Path::new(&config_dir).join(self.as_filename())
    }
}

/// 配置加載器
///
/// 兩層來源：環境對應的 TOML 文件為基底，STOCKBOARD 前綴的環境變數
/// 覆寫個別鍵，`__` 分隔區段（如 STOCKBOARD_DATABASE__PASSWORD）。
pub struct ConfigLoader;

impl ConfigLoader {
    /// 組合文件與環境變數來源並構建配置
    pub fn load(env: Environment) -> Result<Config, ConfigError> {
        Config::builder()
            .add_source(File::from(env.config_path()))
            .add_source(
                ConfigEnvironment::with_prefix("STOCKBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
    }
}
