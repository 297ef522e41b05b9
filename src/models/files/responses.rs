use serde::Serialize;

// 上传成功后返回 token，供后续创建作业或提交时引用
#[derive(Debug, Clone, Serialize)]
pub struct FileUploadResponse {
    pub token: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
}
