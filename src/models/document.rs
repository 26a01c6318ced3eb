use std::path::PathBuf;

/// 待分析的单个文档
///
/// 每个文件对应一次分析，不与其他文档合并提交
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// 文件名（不含目录）
    pub file_name: String,
    /// 文件完整路径
    pub path: PathBuf,
    /// 文件的完整 UTF-8 内容
    pub text: String,
}

impl Document {
    pub fn new(file_name: impl Into<String>, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            path: path.into(),
            text: text.into(),
        }
    }
}
