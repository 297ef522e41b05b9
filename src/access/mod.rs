//! 访问控制
//!
//! 所有角色相关的读写判定集中在这一处纯函数里，
//! 服务层先把行为者的关系数据（授课对、学籍、监护绑定）查出来，
//! 再调用 [`authorize`] 做判定。纯函数便于穷举测试。

use crate::models::common::ErrorCode;

// 行为者：带上判定所需的关系数据
#[derive(Debug, Clone)]
pub enum Actor {
    // 管理员：全部放行
    Admin { user_id: i64 },
    // 教师：附带本人的授课对（科目 ID, 学级 ID）
    Teacher {
        user_id: i64,
        teaches: Vec<(i64, i64)>,
    },
    // 学生：附带学生档案 ID 与所在学级
    Student {
        user_id: i64,
        student_id: i64,
        stream_id: i64,
    },
    // 家长：附带所绑定子女的档案（学生档案 ID, 学级 ID）
    Parent {
        user_id: i64,
        children: Vec<(i64, i64)>,
    },
}

impl Actor {
    pub fn user_id(&self) -> i64 {
        match self {
            Actor::Admin { user_id }
            | Actor::Teacher { user_id, .. }
            | Actor::Student { user_id, .. }
            | Actor::Parent { user_id, .. } => *user_id,
        }
    }
}

// 待判定的操作
#[derive(Debug, Clone, Copy)]
pub enum Action {
    // 学级 / 科目 / 学籍 / 授课 / 监护的增删（仅管理员）
    ManageAcademics,
    // 发布作业到某（科目, 学级）
    CreateAssignment { subject_id: i64, stream_id: i64 },
    // 停用作业，教师须是创建者
    DeactivateAssignment {
        subject_id: i64,
        stream_id: i64,
        created_by: i64,
    },
    // 查看作业详情，学生与家长只能看有效作业
    ViewAssignment {
        subject_id: i64,
        stream_id: i64,
        is_active: bool,
    },
    // 学生的开始 / 提交动作（只能操作本人记录）
    WorkOnSubmission {
        assignment_stream_id: i64,
        submission_student_id: i64,
    },
    // 评分提交，教师须是作业创建者
    GradeSubmission {
        subject_id: i64,
        stream_id: i64,
        created_by: i64,
    },
    // 查看某条提交
    ViewSubmission {
        subject_id: i64,
        stream_id: i64,
        created_by: i64,
        submission_student_id: i64,
    },
    // 查看某个学生（档案）的信息与作业情况
    ViewStudent { student_id: i64 },
}

fn teaches(pairs: &[(i64, i64)], subject_id: i64, stream_id: i64) -> bool {
    pairs.contains(&(subject_id, stream_id))
}

fn has_child(children: &[(i64, i64)], student_id: i64) -> bool {
    children.iter().any(|(sid, _)| *sid == student_id)
}

fn has_child_in_stream(children: &[(i64, i64)], stream_id: i64) -> bool {
    children.iter().any(|(_, st)| *st == stream_id)
}

// 教师对提交的操作先看授课对，再看创建者身份
fn teacher_owns_assignment(
    pairs: &[(i64, i64)],
    user_id: i64,
    subject_id: i64,
    stream_id: i64,
    created_by: i64,
) -> Result<(), ErrorCode> {
    if !teaches(pairs, subject_id, stream_id) {
        Err(ErrorCode::NotAuthorizedForSubjectStream)
    } else if created_by != user_id {
        Err(ErrorCode::Forbidden)
    } else {
        Ok(())
    }
}

/// 判定某行为者能否执行某操作。拒绝时返回对应的错误码。
pub fn authorize(actor: &Actor, action: &Action) -> Result<(), ErrorCode> {
    match actor {
        Actor::Admin { .. } => Ok(()),

        Actor::Teacher {
            user_id,
            teaches: pairs,
        } => match action {
            Action::ManageAcademics => Err(ErrorCode::Forbidden),
            Action::CreateAssignment {
                subject_id,
                stream_id,
            }
            | Action::ViewAssignment {
                subject_id,
                stream_id,
                ..
            } => {
                if teaches(pairs, *subject_id, *stream_id) {
                    Ok(())
                } else {
                    Err(ErrorCode::NotAuthorizedForSubjectStream)
                }
            }
            // 停用、评分、查看提交须同时是创建者
            Action::DeactivateAssignment {
                subject_id,
                stream_id,
                created_by,
            }
            | Action::GradeSubmission {
                subject_id,
                stream_id,
                created_by,
            }
            | Action::ViewSubmission {
                subject_id,
                stream_id,
                created_by,
                ..
            } => teacher_owns_assignment(pairs, *user_id, *subject_id, *stream_id, *created_by),
            // 教师不代替学生提交
            Action::WorkOnSubmission { .. } => Err(ErrorCode::Forbidden),
            Action::ViewStudent { .. } => Err(ErrorCode::Forbidden),
        },

        Actor::Student {
            student_id,
            stream_id,
            ..
        } => match action {
            Action::ManageAcademics
            | Action::CreateAssignment { .. }
            | Action::DeactivateAssignment { .. }
            | Action::GradeSubmission { .. }
            | Action::ViewStudent { .. } => Err(ErrorCode::Forbidden),
            // 只能看本学级的有效作业
            Action::ViewAssignment {
                stream_id: assignment_stream,
                is_active,
                ..
            } => {
                if assignment_stream != stream_id {
                    Err(ErrorCode::NotInStream)
                } else if !is_active {
                    Err(ErrorCode::AssignmentInactive)
                } else {
                    Ok(())
                }
            }
            Action::WorkOnSubmission {
                assignment_stream_id,
                submission_student_id,
            } => {
                if submission_student_id != student_id {
                    Err(ErrorCode::Forbidden)
                } else if assignment_stream_id != stream_id {
                    Err(ErrorCode::NotInStream)
                } else {
                    Ok(())
                }
            }
            // 只能看本人的提交
            Action::ViewSubmission {
                submission_student_id,
                ..
            } => {
                if submission_student_id == student_id {
                    Ok(())
                } else {
                    Err(ErrorCode::Forbidden)
                }
            }
        },

        Actor::Parent { children, .. } => match action {
            // 家长只读，任何修改动作一律拒绝
            Action::ManageAcademics
            | Action::CreateAssignment { .. }
            | Action::DeactivateAssignment { .. }
            | Action::GradeSubmission { .. }
            | Action::WorkOnSubmission { .. } => Err(ErrorCode::ParentReadOnly),
            // 子女所在学级的有效作业可见
            Action::ViewAssignment {
                stream_id,
                is_active,
                ..
            } => {
                if !has_child_in_stream(children, *stream_id) {
                    Err(ErrorCode::Forbidden)
                } else if !is_active {
                    Err(ErrorCode::AssignmentInactive)
                } else {
                    Ok(())
                }
            }
            // 仅限已绑定子女的提交
            Action::ViewSubmission {
                submission_student_id,
                ..
            } => {
                if has_child(children, *submission_student_id) {
                    Ok(())
                } else {
                    Err(ErrorCode::Forbidden)
                }
            }
            Action::ViewStudent { student_id } => {
                if has_child(children, *student_id) {
                    Ok(())
                } else {
                    Err(ErrorCode::Forbidden)
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Actor {
        Actor::Admin { user_id: 1 }
    }

    fn teacher() -> Actor {
        // 教（科目 10, 学级 20）和（科目 11, 学级 21）
        Actor::Teacher {
            user_id: 2,
            teaches: vec![(10, 20), (11, 21)],
        }
    }

    fn student() -> Actor {
        Actor::Student {
            user_id: 3,
            student_id: 30,
            stream_id: 20,
        }
    }

    fn parent() -> Actor {
        // 绑定了学生 30（学级 20）
        Actor::Parent {
            user_id: 4,
            children: vec![(30, 20)],
        }
    }

    #[test]
    fn test_admin_allows_everything() {
        for action in [
            Action::ManageAcademics,
            Action::CreateAssignment {
                subject_id: 99,
                stream_id: 99,
            },
            Action::GradeSubmission {
                subject_id: 99,
                stream_id: 99,
                created_by: 99,
            },
            Action::ViewStudent { student_id: 99 },
        ] {
            assert!(authorize(&admin(), &action).is_ok());
        }
    }

    #[test]
    fn test_teacher_create_within_taught_pair() {
        assert!(
            authorize(
                &teacher(),
                &Action::CreateAssignment {
                    subject_id: 10,
                    stream_id: 20
                }
            )
            .is_ok()
        );
    }

    #[test]
    fn test_teacher_create_outside_taught_pair_denied() {
        // 教科目 10 和学级 21，但不教（10, 21）这个组合
        assert_eq!(
            authorize(
                &teacher(),
                &Action::CreateAssignment {
                    subject_id: 10,
                    stream_id: 21
                }
            ),
            Err(ErrorCode::NotAuthorizedForSubjectStream)
        );
    }

    #[test]
    fn test_teacher_grade_follows_taught_pair() {
        assert!(
            authorize(
                &teacher(),
                &Action::GradeSubmission {
                    subject_id: 11,
                    stream_id: 21,
                    created_by: 2
                }
            )
            .is_ok()
        );
        assert_eq!(
            authorize(
                &teacher(),
                &Action::GradeSubmission {
                    subject_id: 12,
                    stream_id: 20,
                    created_by: 2
                }
            ),
            Err(ErrorCode::NotAuthorizedForSubjectStream)
        );
    }

    #[test]
    fn test_noncreator_teacher_denied_on_others_assignment() {
        // 同教（10, 20），但作业是 5 号教师建的
        assert_eq!(
            authorize(
                &teacher(),
                &Action::GradeSubmission {
                    subject_id: 10,
                    stream_id: 20,
                    created_by: 5
                }
            ),
            Err(ErrorCode::Forbidden)
        );
        assert_eq!(
            authorize(
                &teacher(),
                &Action::ViewSubmission {
                    subject_id: 10,
                    stream_id: 20,
                    created_by: 5,
                    submission_student_id: 30
                }
            ),
            Err(ErrorCode::Forbidden)
        );
        assert_eq!(
            authorize(
                &teacher(),
                &Action::DeactivateAssignment {
                    subject_id: 10,
                    stream_id: 20,
                    created_by: 5
                }
            ),
            Err(ErrorCode::Forbidden)
        );
        // 本人创建的则放行
        assert!(
            authorize(
                &teacher(),
                &Action::DeactivateAssignment {
                    subject_id: 10,
                    stream_id: 20,
                    created_by: 2
                }
            )
            .is_ok()
        );
    }

    #[test]
    fn test_teacher_cannot_manage_academics() {
        assert_eq!(
            authorize(&teacher(), &Action::ManageAcademics),
            Err(ErrorCode::Forbidden)
        );
    }

    #[test]
    fn test_student_views_own_stream_only() {
        assert!(
            authorize(
                &student(),
                &Action::ViewAssignment {
                    subject_id: 10,
                    stream_id: 20,
                    is_active: true
                }
            )
            .is_ok()
        );
        assert_eq!(
            authorize(
                &student(),
                &Action::ViewAssignment {
                    subject_id: 10,
                    stream_id: 21,
                    is_active: true
                }
            ),
            Err(ErrorCode::NotInStream)
        );
    }

    #[test]
    fn test_student_cannot_view_inactive_assignment() {
        assert_eq!(
            authorize(
                &student(),
                &Action::ViewAssignment {
                    subject_id: 10,
                    stream_id: 20,
                    is_active: false
                }
            ),
            Err(ErrorCode::AssignmentInactive)
        );
        // 教师仍然可以看自己停用的作业
        assert!(
            authorize(
                &teacher(),
                &Action::ViewAssignment {
                    subject_id: 10,
                    stream_id: 20,
                    is_active: false
                }
            )
            .is_ok()
        );
    }

    #[test]
    fn test_student_works_on_own_submission_only() {
        assert!(
            authorize(
                &student(),
                &Action::WorkOnSubmission {
                    assignment_stream_id: 20,
                    submission_student_id: 30
                }
            )
            .is_ok()
        );
        // 别人的提交
        assert_eq!(
            authorize(
                &student(),
                &Action::WorkOnSubmission {
                    assignment_stream_id: 20,
                    submission_student_id: 31
                }
            ),
            Err(ErrorCode::Forbidden)
        );
        // 不在自己学级的作业
        assert_eq!(
            authorize(
                &student(),
                &Action::WorkOnSubmission {
                    assignment_stream_id: 21,
                    submission_student_id: 30
                }
            ),
            Err(ErrorCode::NotInStream)
        );
    }

    #[test]
    fn test_student_cannot_grade_or_create() {
        assert_eq!(
            authorize(
                &student(),
                &Action::GradeSubmission {
                    subject_id: 10,
                    stream_id: 20,
                    created_by: 2
                }
            ),
            Err(ErrorCode::Forbidden)
        );
        assert_eq!(
            authorize(
                &student(),
                &Action::CreateAssignment {
                    subject_id: 10,
                    stream_id: 20
                }
            ),
            Err(ErrorCode::Forbidden)
        );
    }

    #[test]
    fn test_parent_reads_child_data() {
        assert!(
            authorize(&parent(), &Action::ViewStudent { student_id: 30 }).is_ok()
        );
        assert!(
            authorize(
                &parent(),
                &Action::ViewSubmission {
                    subject_id: 10,
                    stream_id: 20,
                    created_by: 2,
                    submission_student_id: 30
                }
            )
            .is_ok()
        );
        assert!(
            authorize(
                &parent(),
                &Action::ViewAssignment {
                    subject_id: 10,
                    stream_id: 20,
                    is_active: true
                }
            )
            .is_ok()
        );
    }

    #[test]
    fn test_parent_denied_on_unlinked_student() {
        assert_eq!(
            authorize(&parent(), &Action::ViewStudent { student_id: 31 }),
            Err(ErrorCode::Forbidden)
        );
        assert_eq!(
            authorize(
                &parent(),
                &Action::ViewSubmission {
                    subject_id: 10,
                    stream_id: 20,
                    created_by: 2,
                    submission_student_id: 31
                }
            ),
            Err(ErrorCode::Forbidden)
        );
    }

    #[test]
    fn test_parent_mutations_always_denied() {
        for action in [
            Action::CreateAssignment {
                subject_id: 10,
                stream_id: 20,
            },
            Action::GradeSubmission {
                subject_id: 10,
                stream_id: 20,
                created_by: 2,
            },
            Action::WorkOnSubmission {
                assignment_stream_id: 20,
                submission_student_id: 30,
            },
            Action::ManageAcademics,
        ] {
            assert_eq!(
                authorize(&parent(), &action),
                Err(ErrorCode::ParentReadOnly)
            );
        }
    }
}
