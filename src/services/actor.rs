//! 把登录用户加载成访问判定用的行为者
//!
//! 判定所需的关系数据（授课对、学籍、监护绑定）在这里一次性查出，
//! 之后的判定全部走纯函数。

use std::sync::Arc;

use crate::access::Actor;
use crate::errors::{ClassworkError, Result};
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

pub async fn load_actor(storage: &Arc<dyn Storage>, user: &User) -> Result<Actor> {
    match user.role {
        UserRole::Admin => Ok(Actor::Admin { user_id: user.id }),
        UserRole::Teacher => {
            let teaches = storage
                .list_teaching_for_teacher(user.id)
                .await?
                .into_iter()
                .map(|t| (t.subject_id, t.stream_id))
                .collect();
            Ok(Actor::Teacher {
                user_id: user.id,
                teaches,
            })
        }
        UserRole::Student => {
            let profile = storage
                .get_student_profile_by_user_id(user.id)
                .await?
                .ok_or_else(|| {
                    ClassworkError::authorization(format!("用户 {} 没有学生档案", user.id))
                })?;
            Ok(Actor::Student {
                user_id: user.id,
                student_id: profile.id,
                stream_id: profile.stream_id,
            })
        }
        UserRole::Parent => {
            let children = storage
                .list_children_of_parent(user.id)
                .await?
                .into_iter()
                .map(|p| (p.id, p.stream_id))
                .collect();
            Ok(Actor::Parent {
                user_id: user.id,
                children,
            })
        }
    }
}
