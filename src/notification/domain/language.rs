//! Languages the inspection notice can be rendered in.

use super::ParseNoticeLanguageError;
use crate::inspection::domain::InspectionType;
use serde::Serialize;

/// Language of the tenant-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoticeLanguage {
    /// English wording.
    #[default]
    English,
    /// Simplified Chinese wording.
    Chinese,
}

/// Fixed wording slotted into the notice templates.
#[derive(Debug, Clone, Copy, Serialize)]
pub(super) struct NoticeLabels {
    pub subject: &'static str,
    pub greeting: &'static str,
    pub intro: &'static str,
    pub address: &'static str,
    pub inspection_type: &'static str,
    pub scheduled_time: &'static str,
    pub notes: &'static str,
    pub closing: &'static str,
    pub thanks: &'static str,
}

const ENGLISH_LABELS: NoticeLabels = NoticeLabels {
    subject: "Property inspection notice",
    greeting: "Dear resident,",
    intro: "We are planning an inspection of the following property:",
    address: "Address: ",
    inspection_type: "Inspection type: ",
    scheduled_time: "Scheduled time: ",
    notes: "Notes: ",
    closing: "If you have any questions about the inspection time, please contact us as soon as possible.",
    thanks: "Thank you.",
};

const CHINESE_LABELS: NoticeLabels = NoticeLabels {
    subject: "房屋检查通知",
    greeting: "尊敬的住户：",
    intro: "我们计划对以下房屋进行检查：",
    address: "地址：",
    inspection_type: "检查类型：",
    scheduled_time: "计划时间：",
    notes: "备注：",
    closing: "如果您对检查时间有任何问题，请及时与我们联系。",
    thanks: "谢谢！",
};

impl NoticeLanguage {
    pub(super) const fn labels(self) -> NoticeLabels {
        match self {
            Self::English => ENGLISH_LABELS,
            Self::Chinese => CHINESE_LABELS,
        }
    }

    /// Returns the display text for an inspection type.
    #[must_use]
    pub const fn inspection_type_text(self, kind: InspectionType) -> &'static str {
        match (self, kind) {
            (Self::English, InspectionType::Routine) => "routine inspection",
            (Self::English, InspectionType::MoveIn) => "move-in inspection",
            (Self::English, InspectionType::MoveOut) => "move-out inspection",
            (Self::Chinese, InspectionType::Routine) => "常规检查",
            (Self::Chinese, InspectionType::MoveIn) => "入住检查",
            (Self::Chinese, InspectionType::MoveOut) => "退房检查",
        }
    }

    /// Returns the placeholder shown when no visit time is arranged.
    #[must_use]
    pub const fn unscheduled_text(self) -> &'static str {
        match self {
            Self::English => "To be arranged",
            Self::Chinese => "待定",
        }
    }
}

impl TryFrom<&str> for NoticeLanguage {
    type Error = ParseNoticeLanguageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "zh" | "zh-cn" | "chinese" => Ok(Self::Chinese),
            _ => Err(ParseNoticeLanguageError(value.to_owned())),
        }
    }
}
