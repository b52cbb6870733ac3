//! Providers - task_type ごとの `FieldProvider` 実装
//!
//! - **BaseProvider**: 全 task_type 共通の field（site, controller, config）
//! - **EmailProvider**: e-mail task（送信者・返信先・ページ参照）+ base
//! - **JobsProvider**: 汎用 jobs task（base のみ）

pub mod base;
pub mod checks;
pub mod email;
pub mod jobs;
pub mod render;

pub use self::base::BaseProvider;
pub use self::email::EmailProvider;
pub use self::jobs::JobsProvider;
