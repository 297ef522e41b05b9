//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classwork_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassworkError {
            $($variant(String),)*
        }

        impl ClassworkError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassworkError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassworkError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassworkError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassworkError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassworkError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classwork_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl ClassworkError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassworkError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassworkError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassworkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ClassworkError {
    fn from(err: std::io::Error) -> Self {
        ClassworkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassworkError {
    fn from(err: serde_json::Error) -> Self {
        ClassworkError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassworkError {
    fn from(err: chrono::ParseError) -> Self {
        ClassworkError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassworkError::database_config("test").code(), "E001");
        assert_eq!(ClassworkError::validation("test").code(), "E005");
        assert_eq!(ClassworkError::authorization("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassworkError::validation("test").error_type(),
            "Validation Error"
        );
        assert_eq!(
            ClassworkError::authorization("test").error_type(),
            "Authorization Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = ClassworkError::validation("total_marks must be non-negative");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("total_marks"));
    }
}
