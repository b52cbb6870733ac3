//! taskform-core
//!
//! Additional form fields for scheduled Aimeos tasks: definition and
//! rendering, validation, and persistence onto the task record.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（field 識別子、フォーム状態、descriptor、task record、errors）
//! - **ports**: host 側の協調者の抽象化（Translator, MessageSink）
//! - **typed**: 型付き provider API（SchedulerTask, FieldProvider, host adapter, registry）
//! - **providers**: 実装（BaseProvider, EmailProvider, JobsProvider）
//! - **impls**: ports の実装（Catalog, FlashMessages）
//! - **app**: AppBuilder と JSON record 向けの入口

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod providers;
pub mod typed;
