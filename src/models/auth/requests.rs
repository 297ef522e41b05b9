use serde::Deserialize;

// 登录请求（用户名或邮箱 + 密码）
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
