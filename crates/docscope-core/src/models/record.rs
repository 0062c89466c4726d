use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Guide,
    Implementation,
    Example,
    Template,
    VocabularyTerm,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Implementation => "implementation",
            Self::Example => "example",
            Self::Template => "template",
            Self::VocabularyTerm => "vocabulary_term",
        }
    }
}

/// A handbook page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub title: String,
    pub path: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Bundled sample or reference implementation source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub name: String,
    pub path: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub path: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One localized UI string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyTerm {
    pub key: String,
    pub term: String,
    pub locale: String,
}

/// Searchable unit of content. Each source type carries a fixed field set;
/// scorers only see the uniform [`RecordFields`] view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Guide(Guide),
    Implementation(CodeSample),
    Example(CodeSample),
    Template(Template),
    VocabularyTerm(VocabularyTerm),
}

/// Borrowed text fields of a record. Fields a source does not carry are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFields<'a> {
    pub content: &'a str,
    pub name: &'a str,
    pub path: &'a str,
    pub category: &'a str,
    pub description: &'a str,
}

impl RecordFields<'_> {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            self.content,
            self.name,
            self.path,
            self.category,
            self.description,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }
}

impl Record {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Guide(_) => RecordKind::Guide,
            Self::Implementation(_) => RecordKind::Implementation,
            Self::Example(_) => RecordKind::Example,
            Self::Template(_) => RecordKind::Template,
            Self::VocabularyTerm(_) => RecordKind::VocabularyTerm,
        }
    }

    #[must_use]
    pub fn fields(&self) -> RecordFields<'_> {
        match self {
            Self::Guide(guide) => RecordFields {
                content: &guide.content,
                name: &guide.title,
                path: &guide.path,
                category: guide.section.as_deref().unwrap_or_default(),
                description: "",
            },
            Self::Implementation(sample) | Self::Example(sample) => RecordFields {
                content: &sample.content,
                name: &sample.name,
                path: &sample.path,
                category: sample.language.as_deref().unwrap_or_default(),
                description: sample.description.as_deref().unwrap_or_default(),
            },
            Self::Template(template) => RecordFields {
                content: &template.content,
                name: &template.name,
                path: &template.path,
                category: "",
                description: template.description.as_deref().unwrap_or_default(),
            },
            Self::VocabularyTerm(term) => RecordFields {
                content: &term.term,
                name: &term.key,
                path: "",
                category: "",
                description: "",
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.fields().name
    }
}
