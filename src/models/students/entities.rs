use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生角色（学生表同时承担登录账号）
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub enum StudentRole {
    Student,    // 普通学生
    Admin,      // 管理员
    SuperAdmin, // 超级管理员
}

impl StudentRole {
    pub const STUDENT: &'static str = "student";
    pub const ADMIN: &'static str = "admin";
    pub const SUPER_ADMIN: &'static str = "super_admin";

    pub fn admin_roles() -> &'static [&'static StudentRole] {
        &[&Self::Admin, &Self::SuperAdmin]
    }
    pub fn all_roles() -> &'static [&'static StudentRole] {
        &[&Self::Student, &Self::Admin, &Self::SuperAdmin]
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

impl<'de> Deserialize<'de> for StudentRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            StudentRole::STUDENT => Ok(StudentRole::Student),
            StudentRole::ADMIN => Ok(StudentRole::Admin),
            StudentRole::SUPER_ADMIN => Ok(StudentRole::SuperAdmin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的角色: '{s}'. 支持的角色: student, admin, super_admin"
            ))),
        }
    }
}

impl std::fmt::Display for StudentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentRole::Student => write!(f, "{}", StudentRole::STUDENT),
            StudentRole::Admin => write!(f, "{}", StudentRole::ADMIN),
            StudentRole::SuperAdmin => write!(f, "{}", StudentRole::SUPER_ADMIN),
        }
    }
}

impl std::str::FromStr for StudentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(StudentRole::Student),
            "admin" => Ok(StudentRole::Admin),
            "super_admin" => Ok(StudentRole::SuperAdmin),
            _ => Err(format!("Invalid student role: {s}")),
        }
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: StudentRole,
    pub level_id: i64,
    pub section_id: Option<i64>,
    pub college_year_level: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in StudentRole::all_roles() {
            let parsed = StudentRole::from_str(&role.to_string()).unwrap();
            assert_eq!(&&parsed, role);
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(!StudentRole::Student.is_admin());
        assert!(StudentRole::Admin.is_admin());
        assert!(StudentRole::SuperAdmin.is_admin());
    }
}
