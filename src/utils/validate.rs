use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit");
    }

    // 常见弱密码检查
    let weak_passwords = [
        "password", "12345678", "123456789", "qwerty123", "admin123", "password1", "Password1",
        "Qwerty123", "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        return Err("Password is too common, please choose a stronger password");
    }
    Ok(())
}

/// 总分不能为负，允许 0（纯打卡类作业不计分）
pub fn validate_total_marks(total_marks: f64) -> Result<(), &'static str> {
    if !total_marks.is_finite() || total_marks < 0.0 {
        return Err("Total marks must be zero or a positive number");
    }
    Ok(())
}

/// 得分必须落在 [0, total_marks] 区间内
pub fn validate_marks_obtained(marks: f64, total_marks: f64) -> Result<(), &'static str> {
    if !marks.is_finite() || marks < 0.0 || marks > total_marks {
        return Err("Marks must be between 0 and the assignment's total marks");
    }
    Ok(())
}

/// 提交必须携带文字或附件中的至少一项
pub fn validate_submission_content(
    text: Option<&str>,
    file_token: Option<&str>,
) -> Result<(), &'static str> {
    let has_text = text.map(|t| !t.trim().is_empty()).unwrap_or(false);
    let has_file = file_token.map(|t| !t.is_empty()).unwrap_or(false);
    if !has_text && !has_file {
        return Err("Submission must include text or an attachment");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_ok());
        assert!(validate_password("SecurePass123").is_ok());
    }

    #[test]
    fn test_weak_passwords_rejected() {
        assert!(validate_password("Ab1").is_err());
        assert!(validate_password("abcd1234").is_err());
        assert!(validate_password("ABCD1234").is_err());
        assert!(validate_password("AbcdEfgh").is_err());
        assert!(validate_password("Password1").is_err());
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("zhang_san").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn test_total_marks_bounds() {
        assert!(validate_total_marks(100.0).is_ok());
        // 0 分与大额分值都是合法配置
        assert!(validate_total_marks(0.0).is_ok());
        assert!(validate_total_marks(2000.0).is_ok());
        assert!(validate_total_marks(-5.0).is_err());
        assert!(validate_total_marks(f64::NAN).is_err());
    }

    #[test]
    fn test_marks_obtained_range() {
        assert!(validate_marks_obtained(85.0, 100.0).is_ok());
        assert!(validate_marks_obtained(0.0, 100.0).is_ok());
        assert!(validate_marks_obtained(100.0, 100.0).is_ok());
        assert!(validate_marks_obtained(101.0, 100.0).is_err());
        assert!(validate_marks_obtained(-1.0, 100.0).is_err());
    }

    #[test]
    fn test_submission_content_required() {
        assert!(validate_submission_content(Some("my answer"), None).is_ok());
        assert!(validate_submission_content(None, Some("tok123")).is_ok());
        assert!(validate_submission_content(None, None).is_err());
        assert!(validate_submission_content(Some("   "), None).is_err());
    }
}
