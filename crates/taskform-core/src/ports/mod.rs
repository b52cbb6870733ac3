//! Ports - host 側の協調者の抽象化
//!
//! provider は CMS のグローバル状態（言語オブジェクト、flash message キュー）に
//! 触れず、ここで定義した trait を引数として受け取ります。

pub mod message_sink;
pub mod translator;

pub use self::message_sink::{MessageSink, Severity};
pub use self::translator::Translator;
