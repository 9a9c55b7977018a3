use crate::domain::model::SlotOpening;
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const DEFAULT_TEMPLATE: &str =
    "Ledig tid {date}, {time} finns vid {name} som ligger på adressen {address}\n\n {link}";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(date|time|name|address|link)\}").expect("placeholder pattern is valid")
});

/// 通知訊息模板，支援 {date} {time} {name} {address} {link}
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    template: String,
}

impl MessageTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Single pass: substituted values are never expanded again.
    pub fn render(&self, opening: &SlotOpening) -> String {
        PLACEHOLDER
            .replace_all(&self.template, |caps: &Captures| match &caps[1] {
                "date" => opening.date.clone(),
                "time" => opening.when.clone(),
                "name" => opening.location_name.clone(),
                "address" => opening.address.clone(),
                _ => opening.booking_link.clone(),
            })
            .into_owned()
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
