pub mod logger;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("无法打开文档: {0}")]
    SourceUnavailable(String),

    #[error("页码越界: 第 {index} 页 (文档共 {count} 页)")]
    PageOutOfRange { index: usize, count: usize },

    #[error("提取失败: {0}")]
    Extraction(String),

    #[error("尚未加载文档")]
    NoDocument,

    #[error("没有可导出的提取结果")]
    NoRecord,

    #[error("CSV导出错误: {0}")]
    Export(#[from] csv::Error),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    TomlDeError(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

pub type ValuationResult<T> = Result<T, ValuationError>;
