use crate::markup::escape;

/// A single DOM splice instruction in turbo-stream form.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamAction {
    Append { target: String, content: String },
    Replace { target: String, content: String },
    Remove { target: String },
}

impl StreamAction {
    pub fn append(target: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Append {
            target: target.into(),
            content: content.into(),
        }
    }

    pub fn replace(target: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Replace {
            target: target.into(),
            content: content.into(),
        }
    }

    pub fn remove(target: impl Into<String>) -> Self {
        Self::Remove {
            target: target.into(),
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Self::Append { .. } => "append",
            Self::Replace { .. } => "replace",
            Self::Remove { .. } => "remove",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Append { target, .. } | Self::Replace { target, .. } | Self::Remove { target } => {
                target
            }
        }
    }

    pub fn encode(&self) -> String {
        let open = format!(
            r#"<turbo-stream action="{}" target="{}">"#,
            self.action(),
            escape(self.target())
        );
        match self {
            Self::Append { content, .. } | Self::Replace { content, .. } => {
                format!("{open}<template>{content}</template></turbo-stream>")
            }
            Self::Remove { .. } => format!("{open}</turbo-stream>"),
        }
    }
}

pub fn encode_all(actions: &[StreamAction]) -> String {
    actions
        .iter()
        .map(StreamAction::encode)
        .collect::<Vec<_>>()
        .join("\n")
}
