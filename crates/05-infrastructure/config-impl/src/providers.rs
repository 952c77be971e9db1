//! 配置提供者实现

use config_abstractions::{
    ConfigProvider, ConfigurationDescriptor, ContainerDescriptor, ContainerDescriptorProvider,
    TypeListProvider,
};
use infrastructure_common::ConfigError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 打开配置文件，文件不存在时返回 [`ConfigError::FileNotFound`]
fn open_config_file(path: &Path) -> Result<File, ConfigError> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::FileReadError { source: e }
        }
    })
}

/// 文本类型清单提供者
///
/// 每行一个实现标识符，只去掉行尾换行符（`\n` 或 `\r\n`），不做其他修剪。
/// 空行视为缺行。
#[derive(Debug, Clone)]
pub struct TextConfigProvider {
    file_path: PathBuf,
}

impl TextConfigProvider {
    /// 创建新的文本类型清单提供者
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigProvider for TextConfigProvider {
    fn name(&self) -> &str {
        "TextConfigProvider"
    }

    fn source(&self) -> &Path {
        &self.file_path
    }
}

impl TypeListProvider for TextConfigProvider {
    fn read_type_list(&self) -> Result<ConfigurationDescriptor, ConfigError> {
        debug!("读取类型清单: {}", self.file_path.display());

        // 文件句柄在本函数返回时释放，包括出错路径
        let file = open_config_file(&self.file_path)?;
        let mut lines = BufReader::new(file).lines();
        let source = self.file_path.display().to_string();

        let data_type = lines
            .next()
            .transpose()?
            .filter(|line| !line.is_empty())
            .ok_or_else(|| ConfigError::MissingLine {
                path: source.clone(),
                line: 1,
            })?;
        let computation_type = lines.next().transpose()?.filter(|line| !line.is_empty());

        debug!(
            "类型清单: data={}, computation={:?}",
            data_type, computation_type
        );

        let descriptor = ConfigurationDescriptor::new(source, data_type);
        Ok(match computation_type {
            Some(computation_type) => descriptor.with_computation_type(computation_type),
            None => descriptor,
        })
    }
}

/// bean 描述文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    /// TOML
    Toml,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl DescriptorFormat {
    /// 根据扩展名推断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// 解析描述内容
    pub fn parse(self, content: &str) -> Result<ContainerDescriptor, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(ConfigError::parse_error),
            Self::Json => serde_json::from_str(content).map_err(ConfigError::parse_error),
            Self::Yaml => serde_yaml::from_str(content).map_err(ConfigError::parse_error),
        }
    }
}

/// bean 描述文件提供者
#[derive(Debug, Clone)]
pub struct DescriptorConfigProvider {
    file_path: PathBuf,
    format: DescriptorFormat,
}

impl DescriptorConfigProvider {
    /// 创建新的描述文件提供者，格式由扩展名决定
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_path = path.as_ref().to_path_buf();
        let format = DescriptorFormat::from_path(&file_path).ok_or_else(|| {
            ConfigError::UnsupportedFormat {
                path: file_path.display().to_string(),
            }
        })?;
        Ok(Self { file_path, format })
    }

    /// 描述文件格式
    pub fn format(&self) -> DescriptorFormat {
        self.format
    }
}

impl ConfigProvider for DescriptorConfigProvider {
    fn name(&self) -> &str {
        "DescriptorConfigProvider"
    }

    fn source(&self) -> &Path {
        &self.file_path
    }
}

impl ContainerDescriptorProvider for DescriptorConfigProvider {
    fn read_container_descriptor(&self) -> Result<ContainerDescriptor, ConfigError> {
        debug!(
            "加载 {:?} 描述文件: {}",
            self.format,
            self.file_path.display()
        );

        let mut content = String::new();
        {
            use std::io::Read;
            let mut file = open_config_file(&self.file_path)?;
            file.read_to_string(&mut content)?;
        }

        let descriptor = self.format.parse(&content)?;
        debug!("描述文件加载完成，共 {} 个 bean", descriptor.beans.len());
        Ok(descriptor)
    }
}
