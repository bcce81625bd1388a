//! 集成测试公共模块

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 创建测试用的日志文件
#[allow(dead_code)]
pub fn create_test_log(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// 一条 Hibernate 参数绑定日志行
#[allow(dead_code)]
pub fn binder_line(ordinal: usize, type_name: &str, value: &str) -> String {
    binder_line_raw(&ordinal.to_string(), type_name, value)
}

/// 序号按原文写入的绑定日志行
#[allow(dead_code)]
pub fn binder_line_raw(ordinal: &str, type_name: &str, value: &str) -> String {
    format!(
        "2024-05-06 09:15:02,118 TRACE [org.hibernate.type.descriptor.sql.BasicBinder] (http-nio-8080-exec-3) binding parameter [{ordinal}] as [{type_name}] - [{value}]"
    )
}

/// 标准测试日志内容：两条查询，中间夹杂其他日志
#[allow(dead_code)]
pub const SAMPLE_HIBERNATE_LOG: &str = r#"2024-05-06 09:15:02,101 INFO  [com.example.OrderService] (http-nio-8080-exec-3) loading orders
2024-05-06 09:15:02,117 DEBUG [org.hibernate.SQL] (http-nio-8080-exec-3) 
    select
        o.id as id1_0_,
        o.customer as customer2_0_ 
    from
        orders o 
    where
        o.customer_id=? 
        and o.status=?
2024-05-06 09:15:02,118 TRACE [org.hibernate.type.descriptor.sql.BasicBinder] (http-nio-8080-exec-3) binding parameter [1] as [BIGINT] - [1001]
2024-05-06 09:15:02,118 TRACE [org.hibernate.type.descriptor.sql.BasicBinder] (http-nio-8080-exec-3) binding parameter [2] as [VARCHAR] - [SHIPPED]
2024-05-06 09:15:02,130 DEBUG [org.hibernate.SQL] (http-nio-8080-exec-3) 
    select
        c.name as name1_1_ 
    from
        customers c 
    where
        c.email=?
2024-05-06 09:15:02,131 TRACE [org.hibernate.type.descriptor.sql.BasicBinder] (http-nio-8080-exec-3) binding parameter [1] as [VARCHAR] - [null]
"#;

/// `SAMPLE_HIBERNATE_LOG` 的预期还原结果
#[allow(dead_code)]
pub const SAMPLE_EXPECTED_OUTPUT: &str = "    select
        o.id as id1_0_,
        o.customer as customer2_0_ 
    from
        orders o 
    where
        o.customer_id=1001 
        and o.status='SHIPPED'
    select
        c.name as name1_1_ 
    from
        customers c 
    where
        c.email=null
";
