use serde::Deserialize;

use super::entities::AssignmentKind;

// 创建作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub kind: AssignmentKind,
    pub subject_id: i64,
    pub stream_id: i64,
    pub term_id: Option<i64>,
    pub file_token: Option<String>,
    pub total_marks: f64,
    pub due_date: chrono::DateTime<chrono::Utc>,
}

// 作业列表查询参数
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AssignmentListQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    // 过滤：科目
    pub subject_id: Option<i64>,
    // 过滤：学级
    pub stream_id: Option<i64>,
    // 过滤：作业类型
    pub kind: Option<AssignmentKind>,
    // 过滤：是否有效。缺省时不过滤，新旧作业都列出来
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_to_all_statuses() {
        // 不带参数时不对 is_active 做过滤
        let query: AssignmentListQuery =
            serde_json::from_str("{}").expect("empty query should parse");
        assert!(query.is_active.is_none());

        let query: AssignmentListQuery = serde_json::from_str(r#"{"is_active":true,"page":2}"#)
            .expect("query should parse");
        assert_eq!(query.is_active, Some(true));
        assert_eq!(query.page, Some(2));
    }
}

