/*
* 开发心理过程：
* 1. 计算器本身无状态，配置只覆盖外围：日志级别、随机种子、输出格式
* 2. 配置文件为TOML，缺失时使用默认值，不强制创建文件
* 3. 加载后统一校验，错误以ConfigError返回
*/

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::Path,
    str::FromStr,
};
use log::{debug, info, LevelFilter};

use crate::core::error::{CalcError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// 固定种子，设置后每次运行的随机伤害序列相同
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl CalculatorConfig {
    pub fn log_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.general.log_level).unwrap_or(LevelFilter::Info)
    }
}

pub struct ConfigManager;

impl ConfigManager {
    pub fn load_from_file(path: &Path) -> Result<CalculatorConfig> {
        if !path.exists() {
            info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(CalculatorConfig::default());
        }

        let content = fs::read_to_string(path)?;
        let config: CalculatorConfig = toml::from_str(&content)
            .map_err(|e| CalcError::ConfigError(format!("解析配置文件失败: {}", e)))?;

        Self::validate_config(&config)?;
        info!("成功加载配置文件: {:?}", path);
        Ok(config)
    }

    pub fn save_config_to_file(config: &CalculatorConfig, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(config)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        debug!("配置已保存到: {:?}", path);
        Ok(())
    }

    pub fn validate_config(config: &CalculatorConfig) -> Result<()> {
        if LevelFilter::from_str(&config.general.log_level).is_err() {
            return Err(CalcError::ConfigError(format!(
                "无效的日志级别: {}",
                config.general.log_level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.random.seed, None);
        assert!(!config.output.json);
        assert_eq!(config.log_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_config() {
        let config: CalculatorConfig = toml::from_str("[random]\nseed = 42\n").unwrap();
        assert_eq!(config.random.seed, Some(42));
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_config_validation() {
        let mut config = CalculatorConfig::default();
        assert!(ConfigManager::validate_config(&config).is_ok());

        config.general.log_level = "verbose".to_string();
        assert!(matches!(
            ConfigManager::validate_config(&config),
            Err(CalcError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigManager::load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("roco.toml");

        let mut config = CalculatorConfig::default();
        config.general.log_level = "debug".to_string();
        config.random.seed = Some(7);
        config.output.json = true;
        ConfigManager::save_config_to_file(&config, &config_path).unwrap();

        assert!(config_path.exists());

        let loaded_config = ConfigManager::load_from_file(&config_path).unwrap();
        assert_eq!(loaded_config, config);
        assert_eq!(loaded_config.log_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[general\nlog_level = 1").unwrap();

        assert!(matches!(
            ConfigManager::load_from_file(&config_path),
            Err(CalcError::ConfigError(_))
        ));
    }
}
