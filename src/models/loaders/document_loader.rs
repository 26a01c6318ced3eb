use crate::error::{AppError, AppResult, FileError};
use crate::models::document::Document;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 列出文件夹中的所有条目
///
/// 保持文件系统枚举的顺序，不做排序，也不过滤子目录。
/// 子目录会在 [`load_document`] 读取时报错。
pub async fn list_documents(folder_path: &str) -> AppResult<Vec<PathBuf>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let read_dir_failed = |source| FileError::ReadDirFailed {
        path: folder_path.to_string(),
        source,
    };

    let mut entries = fs::read_dir(&folder).await.map_err(read_dir_failed)?;
    let mut paths = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_failed)? {
        paths.push(entry.path());
    }

    tracing::debug!("目录 {} 中共有 {} 个条目", folder_path, paths.len());

    Ok(paths)
}

/// 读取单个文件的完整内容（UTF-8）
pub async fn load_document(path: &Path) -> AppResult<Document> {
    let display_path = path.display().to_string();

    let bytes = fs::read(path)
        .await
        .map_err(|e| AppError::file_read_failed(display_path.clone(), e))?;

    let text = String::from_utf8(bytes).map_err(|_| FileError::NotUtf8 {
        path: display_path.clone(),
    })?;

    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    tracing::debug!("已加载 {} ({} 字节)", file_name, text.len());

    Ok(Document::new(file_name, path, text))
}
