//! 解析結果の書き出し（ダウンロード・クリップボード）

pub mod download;
pub mod clipboard;
