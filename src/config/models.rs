use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<String>,
}

impl Settings {
    /// Overlays the non-empty values of `other` onto `self`.
    pub fn merge(&mut self, other: Settings) {
        fn pick(slot: &mut Option<String>, value: Option<String>) {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *slot = Some(value);
            }
        }
        pick(&mut self.admin_token, other.admin_token);
        pick(&mut self.domain, other.domain);
        pick(&mut self.props, other.props);
    }

    pub fn is_empty(&self) -> bool {
        self.admin_token.is_none() && self.domain.is_none() && self.props.is_none()
    }
}
