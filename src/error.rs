use thiserror::Error;

/// 应用程序错误类型
///
/// 提取流程本身对坏数据全量容错（见 `QuestionExtractor`），
/// 这里的错误只来自外围 I/O：目录创建、结果写出、文档打包，
/// 以及选择器编译这类程序性错误。
#[derive(Debug, Error)]
pub enum AppError {
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSS 选择器编译失败（程序性错误，不应出现在运行期）
    #[error("选择器编译失败 ({selector}): {message}")]
    SelectorParse { selector: String, message: String },

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// 其他 I/O 错误
    #[error("I/O错误: {0}")]
    Io(#[from] std::io::Error),

    /// Word 文档打包失败
    #[error("Word文档打包失败: {0}")]
    DocxBuild(#[from] zip::result::ZipError),
}

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, AppError>;
