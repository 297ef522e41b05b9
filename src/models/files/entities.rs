use serde::{Deserialize, Serialize};

// 上传文件的用途，决定允许的文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePurpose {
    // 作业附件（教师上传）
    Assignment,
    // 提交附件（学生上传）
    Submission,
}

impl std::str::FromStr for FilePurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignment" => Ok(FilePurpose::Assignment),
            "submission" => Ok(FilePurpose::Submission),
            _ => Err(format!("Invalid file purpose: {s}")),
        }
    }
}

// 已上传文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    // 下载 token，同时是主键
    pub token: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub uploaded_by: i64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
