//! Resume Parser Common Library
//!
//! Web(WASM)クライアントから使うプラットフォーム非依存の型とロジック

pub mod types;
pub mod error;
pub mod config;
pub mod upload;
pub mod response;
pub mod view;
pub mod session;
pub mod notice;
pub mod js_number;

pub use types::{ParsedResume, Experience, Education};
pub use error::{Error, Result};
pub use config::ClientConfig;
pub use upload::{DocumentKind, SelectedFile};
pub use response::{interpret_response, ParsedDocument};
pub use view::{ConfidenceDisplay, ConfidenceTier, ResumeView, Section};
pub use session::{Phase, Session};
pub use notice::{Notice, NoticeKind, NoticeQueue};
