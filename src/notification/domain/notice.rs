//! Inspection notice composition.

use super::{NoticeLanguage, NoticeRenderError, OutboundEmail};
use crate::inspection::domain::{EmailAddress, InspectionTask};
use minijinja::Environment;
use serde_json::{Value, json};

const SUBJECT_TEMPLATE_NAME: &str = "notice_subject.txt";
const TEXT_TEMPLATE_NAME: &str = "notice_body.txt";
const HTML_TEMPLATE_NAME: &str = "notice_body.html";

const SUBJECT_TEMPLATE: &str = "{{ labels.subject }} - {{ address }}";

const TEXT_TEMPLATE: &str = "\
{{ labels.greeting }}

{{ labels.intro }}

{{ labels.address }}{{ address }}
{{ labels.inspection_type }}{{ inspection_type }}
{{ labels.scheduled_time }}{{ scheduled_time }}
{% if notes %}{{ labels.notes }}{{ notes }}
{% endif %}

{{ labels.closing }}

{{ labels.thanks }}

{{ signature }}
";

const HTML_TEMPLATE: &str = r#"<div style="font-family: Arial, sans-serif; color: #333;">
  <p>{{ labels.greeting }}</p>
  <p>{{ labels.intro }}</p>
  <div style="margin: 20px 0; padding: 15px; background-color: #f5f5f5; border-radius: 5px;">
    <p><strong>{{ labels.address }}</strong>{{ address }}</p>
    <p><strong>{{ labels.inspection_type }}</strong>{{ inspection_type }}</p>
    <p><strong>{{ labels.scheduled_time }}</strong>{{ scheduled_time }}</p>
    {% if notes %}<p><strong>{{ labels.notes }}</strong>{{ notes }}</p>{% endif %}
  </div>
  <p>{{ labels.closing }}</p>
  <p>{{ labels.thanks }}</p>
  <p style="color: #666; margin-top: 30px;">{{ signature }}</p>
</div>
"#;

/// Renders the fixed inspection notice for a task.
///
/// The HTML body is auto-escaped; the subject and plain-text body are not.
#[derive(Debug, Clone)]
pub struct NoticeComposer {
    environment: Environment<'static>,
    language: NoticeLanguage,
    signature: String,
}

impl NoticeComposer {
    /// Creates a composer for the given language and sender signature.
    ///
    /// # Errors
    ///
    /// Returns [`NoticeRenderError`] when a built-in template fails to parse.
    pub fn new(
        language: NoticeLanguage,
        signature: impl Into<String>,
    ) -> Result<Self, NoticeRenderError> {
        let mut environment = Environment::new();
        environment.set_trim_blocks(true);
        for (name, source) in [
            (SUBJECT_TEMPLATE_NAME, SUBJECT_TEMPLATE),
            (TEXT_TEMPLATE_NAME, TEXT_TEMPLATE),
            (HTML_TEMPLATE_NAME, HTML_TEMPLATE),
        ] {
            environment
                .add_template(name, source)
                .map_err(|error| NoticeRenderError {
                    template: name,
                    reason: error.to_string(),
                })?;
        }

        Ok(Self {
            environment,
            language,
            signature: signature.into(),
        })
    }

    /// Returns the notice language.
    #[must_use]
    pub const fn language(&self) -> NoticeLanguage {
        self.language
    }

    /// Renders the notice for `task`, addressed to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`NoticeRenderError`] when rendering fails.
    pub fn compose(
        &self,
        task: &InspectionTask,
        recipient: EmailAddress,
    ) -> Result<OutboundEmail, NoticeRenderError> {
        let context = self.context(task);
        let subject = self.render(SUBJECT_TEMPLATE_NAME, &context)?;
        let text_body = self.render(TEXT_TEMPLATE_NAME, &context)?;
        let html_body = self.render(HTML_TEMPLATE_NAME, &context)?;
        Ok(OutboundEmail::new(
            recipient,
            subject.trim().to_owned(),
            text_body,
            html_body,
        ))
    }

    fn context(&self, task: &InspectionTask) -> Value {
        let scheduled_time = task.scheduled_at().map_or_else(
            || self.language.unscheduled_text().to_owned(),
            |at| at.format("%Y-%m-%d %H:%M UTC").to_string(),
        );
        json!({
            "labels": self.language.labels(),
            "address": task.address().as_str(),
            "inspection_type": self.language.inspection_type_text(task.inspection_type()),
            "scheduled_time": scheduled_time,
            "notes": task.notes(),
            "signature": self.signature,
        })
    }

    fn render(&self, name: &'static str, context: &Value) -> Result<String, NoticeRenderError> {
        self.environment
            .get_template(name)
            .and_then(|template| template.render(context))
            .map_err(|error| NoticeRenderError {
                template: name,
                reason: error.to_string(),
            })
    }
}
