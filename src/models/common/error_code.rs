use serde::{Deserialize, Serialize};

/// 业务错误码
///
/// 按域分组：
/// - 0          成功
/// - 1000-1999  通用错误
/// - 2000-2999  认证与用户
/// - 3000-3999  教务数据（学级/科目/学生/监护）
/// - 4000-4999  作业
/// - 5000-5999  提交与评分
/// - 6000-6999  文件
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,

    // 认证与用户
    AuthFailed = 2000,
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserNameInvalid = 2003,
    UserEmailInvalid = 2004,
    UserPasswordInvalid = 2005,

    // 教务数据
    StreamNotFound = 3000,
    SubjectNotFound = 3001,
    StudentNotFound = 3002,
    StreamAlreadyExists = 3003,
    SubjectAlreadyExists = 3004,
    StudentAlreadyEnrolled = 3005,
    GuardianLinkExists = 3006,

    // 作业
    AssignmentNotFound = 4000,
    AssignmentInactive = 4001,
    NotAuthorizedForSubjectStream = 4002,
    TotalMarksInvalid = 4003,

    // 提交与评分
    SubmissionNotFound = 5000,
    SubmissionContentMissing = 5001,
    SubmissionAlreadyGraded = 5002,
    NothingToGrade = 5003,
    MarksOutOfRange = 5004,
    NotInStream = 5005,
    ParentReadOnly = 5006,

    // 文件
    FileNotFound = 6000,
    FileTypeNotAllowed = 6001,
    FileSizeExceeded = 6002,
    FileUploadFailed = 6003,
    MultifileUploadNotAllowed = 6004,
}
