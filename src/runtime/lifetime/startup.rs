use crate::models::students::entities::StudentRole;
use crate::models::students::requests::CreateStudentRequest;
use crate::storage::Storage;
use crate::utils::password::{generate_random_password, hash_password};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 学段种子数据：学段名 + 班组列表
const LEVEL_SEED: &[(&str, &[&str])] = &[
    ("Junior High", &["Section A", "Section B"]),
    ("Senior High", &["STEM", "ABM", "HUMSS"]),
    ("College", &[]),
];

/// 初始化学段列表
/// 学段是固定参考数据，只在空库时写入
async fn seed_levels(storage: &Arc<dyn Storage>) -> Option<i64> {
    match storage.count_levels().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} level(s), skipping level seed", count);
            return storage
                .list_levels()
                .await
                .ok()
                .and_then(|levels| levels.first().map(|l| l.id));
        }
        Ok(_) => {
            info!("No levels found in database, seeding level list...");
        }
        Err(e) => {
            warn!("Failed to count levels: {}, skipping level seed", e);
            return None;
        }
    }

    let mut first_level_id = None;
    for (level_name, sections) in LEVEL_SEED {
        let level = match storage.create_level(level_name).await {
            Ok(level) => level,
            Err(e) => {
                warn!("Failed to seed level {}: {}", level_name, e);
                continue;
            }
        };
        first_level_id.get_or_insert(level.id);

        for section_name in *sections {
            if let Err(e) = storage.create_section(level.id, section_name).await {
                warn!(
                    "Failed to seed section {} for level {}: {}",
                    section_name, level_name, e
                );
            }
        }
        info!(
            "Seeded level {} (ID: {}) with {} section(s)",
            level_name,
            level.id,
            sections.len()
        );
    }
    first_level_id
}

/// 初始化默认超级管理员账号
/// 如果数据库中没有任何学生账号，则创建一个默认的管理员
async fn seed_admin(storage: &Arc<dyn Storage>, level_id: i64) {
    match storage.count_students().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} student(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No accounts found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count students: {}, skipping admin seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("TEVAL_ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set TEVAL_ADMIN_PASSWORD");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = CreateStudentRequest {
        full_name: "Administrator".to_string(),
        email: "admin@localhost".to_string(),
        password: password_hash,
        role: Some(StudentRole::SuperAdmin),
        level_id,
        section_id: None,
        college_year_level: None,
    };

    match storage.create_student(admin_request).await {
        Ok(student) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {})",
                student.id, student.email
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化、迁移与种子数据
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 种子数据：先学段后管理员（管理员账号要挂在某个学段下）
    let first_level_id = seed_levels(&storage).await;
    if let Some(level_id) = first_level_id {
        seed_admin(&storage, level_id).await;
    } else {
        warn!("No level available, skipping admin seed");
    }

    StartupContext { storage }
}
