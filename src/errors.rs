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
macro_rules! define_teval_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TevalError {
            $($variant(String),)*
        }

        impl TevalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TevalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TevalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TevalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TevalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TevalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_teval_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UniqueViolation("E004", "Unique Constraint Violation"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl TevalError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否由唯一索引冲突引起（提交竞态时归并为“已评价”处理）
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, TevalError::UniqueViolation(_))
    }
}

impl fmt::Display for TevalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TevalError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TevalError {
    fn from(err: sea_orm::DbErr) -> Self {
        let msg = err.to_string();
        if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
            TevalError::UniqueViolation(msg)
        } else {
            TevalError::DatabaseOperation(msg)
        }
    }
}

impl From<std::io::Error> for TevalError {
    fn from(err: std::io::Error) -> Self {
        TevalError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TevalError {
    fn from(err: serde_json::Error) -> Self {
        TevalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TevalError {
    fn from(err: chrono::ParseError) -> Self {
        TevalError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TevalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TevalError::database_config("test").code(), "E001");
        assert_eq!(TevalError::unique_violation("test").code(), "E004");
        assert_eq!(TevalError::validation("test").code(), "E005");
        assert_eq!(TevalError::authentication("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TevalError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            TevalError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TevalError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_unique_violation_detection() {
        let err = TevalError::from(sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: evaluations.student_id".to_string(),
        ));
        assert!(err.is_unique_violation());

        let other = TevalError::from(sea_orm::DbErr::Custom("connection reset".to_string()));
        assert!(!other.is_unique_violation());
    }

    #[test]
    fn test_format_simple() {
        let err = TevalError::validation("Invalid email");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid email"));
    }
}
