use crate::github::error::Error;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PullRequestRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub draft: bool,
}

impl PullRequestRequest {
    pub fn new(title: impl Into<String>, head: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            body: None,
            draft: false,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("title", &self.title),
            ("head", &self.head),
            ("base", &self.base),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Configuration(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::request::SerializeRequest;
    use serde_json::json;

    #[test]
    fn omits_body_and_defaults_draft_to_false() -> anyhow::Result<()> {
        let request = PullRequestRequest::new("Add X", "feat", "main");

        let body: serde_json::Value = serde_json::from_str(&request.into_request()?)?;

        assert_eq!(
            body,
            json!({"title": "Add X", "head": "feat", "base": "main", "draft": false})
        );

        Ok(())
    }

    #[test]
    fn serializes_body_and_draft_when_set() -> anyhow::Result<()> {
        let mut request = PullRequestRequest::new("Add X", "feat", "main");
        request.body = Some("details".to_owned());
        request.draft = true;

        let body: serde_json::Value = serde_json::from_str(&request.into_request()?)?;

        assert_eq!(body["body"], "details");
        assert_eq!(body["draft"], true);

        Ok(())
    }

    #[test]
    fn rejects_blank_required_fields() {
        let request = PullRequestRequest::new("Add X", " ", "main");

        let err = request.validate().unwrap_err();

        assert!(matches!(err, Error::Configuration(_)));
    }
}
