use serde::Deserialize;

use super::entities::UserRole;

// 创建用户请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    // 明文密码，入库前由服务层哈希
    pub password: String,
    pub role: UserRole,
    pub display_name: Option<String>,
}
