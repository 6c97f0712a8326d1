//! 解析サーバー連携

pub mod upload;
