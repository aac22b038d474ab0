//! Domain model for inspection notices.

mod email;
mod error;
mod language;
mod notice;

pub use email::OutboundEmail;
pub use error::{NoticeRenderError, ParseNoticeLanguageError};
pub use language::NoticeLanguage;
pub use notice::NoticeComposer;
