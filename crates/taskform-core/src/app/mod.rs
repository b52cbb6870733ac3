//! App - アプリケーション層
//!
//! provider を registry にまとめ、host が 1 つの入口から使えるようにします。
//!
//! # 主要コンポーネント
//! - **AppBuilder**: registry の構築と起動時検証
//! - **App**: task_type を指定して fields / validate / save を呼ぶ入口

pub mod builder;

pub use self::builder::{App, AppBuilder, BuildError};
