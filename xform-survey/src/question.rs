use indexmap::IndexMap;

use crate::{
    ElementKind, ElementPath, MediaValue, MultiLangText, Node, RenderContext, SurveyElement,
    SurveyError,
};

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Element name; also the instance node name.
    name: String,

    /// The prompt text shown to the user.
    label: MultiLangText,

    /// Optional help text shown under the prompt.
    hint: Option<MultiLangText>,

    /// Optional image/audio/video attached to the prompt.
    media: Option<MediaValue>,

    /// The kind of question (determines control and bind type).
    kind: QuestionKind,

    required: bool,

    /// XPath constraint, may contain `${name}` references.
    constraint: Option<String>,

    /// XPath relevance condition, may contain `${name}` references.
    relevant: Option<String>,

    /// Default value written to the instance.
    default: Option<String>,
}

impl Question {
    /// Create a new question.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<MultiLangText>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            hint: None,
            media: None,
            kind,
            required: false,
            constraint: None,
            relevant: None,
            default: None,
        }
    }

    /// Set the hint text.
    pub fn with_hint(mut self, hint: impl Into<MultiLangText>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Attach media to the prompt.
    pub fn with_media(mut self, media: MediaValue) -> Self {
        self.media = Some(media);
        self
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the constraint expression.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    /// Set the relevance condition.
    pub fn with_relevant(mut self, relevant: impl Into<String>) -> Self {
        self.relevant = Some(relevant.into());
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Get the prompt text.
    pub fn label(&self) -> &MultiLangText {
        &self.label
    }

    /// Get the hint text.
    pub fn hint(&self) -> Option<&MultiLangText> {
        self.hint.as_ref()
    }

    /// Get the question kind.
    pub fn question_kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Check if an answer is mandatory.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the default value.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

impl SurveyElement for Question {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Question
    }

    fn children(&self) -> Vec<&dyn SurveyElement> {
        self.kind
            .choices()
            .iter()
            .map(|choice| choice as &dyn SurveyElement)
            .collect()
    }

    fn translation_keys(&self, path: &ElementPath) -> IndexMap<&'static str, String> {
        let mut keys = IndexMap::new();
        keys.insert("label", path.field_key("label"));
        if self.hint.is_some() {
            keys.insert("hint", path.field_key("hint"));
        }
        keys
    }

    fn media_keys(&self, path: &ElementPath) -> IndexMap<&'static str, String> {
        let mut keys = IndexMap::new();
        if self.media.is_some() {
            // Media shares the label's key so the label reference picks it up.
            keys.insert("media", path.field_key("label"));
        }
        keys
    }

    fn text(&self, field: &str) -> Option<&MultiLangText> {
        match field {
            "label" => Some(&self.label),
            "hint" => self.hint.as_ref(),
            _ => None,
        }
    }

    fn media(&self, field: &str) -> Option<&MediaValue> {
        match field {
            "media" => self.media.as_ref(),
            _ => None,
        }
    }

    fn validate(&self, path: &ElementPath) -> Result<(), SurveyError> {
        if self.kind.is_select() && self.kind.choices().is_empty() {
            return Err(SurveyError::EmptyChoices { path: path.clone() });
        }
        Ok(())
    }

    fn instance(&self) -> Node {
        let node = Node::element(&self.name);
        match &self.default {
            Some(default) => node.with_text(default),
            None => node,
        }
    }

    fn bindings(
        &self,
        path: &ElementPath,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<Node>, SurveyError> {
        let mut bind = Node::element("bind")
            .attr("nodeset", path.as_str())
            .attr("type", self.kind.bind_type());
        if self.required {
            bind = bind.attr("required", "true()");
        }
        if let Some(constraint) = &self.constraint {
            bind = bind.attr("constraint", ctx.resolve(constraint)?);
        }
        if let Some(relevant) = &self.relevant {
            bind = bind.attr("relevant", ctx.resolve(relevant)?);
        }
        if matches!(self.kind, QuestionKind::Note) {
            bind = bind.attr("readonly", "true()");
        }
        Ok(vec![bind])
    }

    fn control(
        &self,
        path: &ElementPath,
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<Node>, SurveyError> {
        let mut control = Node::element(self.kind.control_tag())
            .attr("ref", path.as_str())
            .child(ctx.text_node("label", &path.field_key("label"), &self.label)?);
        if let Some(hint) = &self.hint {
            control = control.child(ctx.text_node("hint", &path.field_key("hint"), hint)?);
        }
        for choice in self.kind.choices() {
            control = control.child(choice.item(&path.child(&choice.name), ctx)?);
        }
        Ok(vec![control])
    }
}

/// The kind of question, determining control and bind type.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Free text.
    Text,

    /// Whole number.
    Integer,

    /// Decimal number.
    Decimal,

    /// Calendar date.
    Date,

    /// Read-only text, nothing to answer.
    Note,

    /// Pick exactly one choice.
    SelectOne(Vec<Choice>),

    /// Pick any number of choices.
    SelectMany(Vec<Choice>),
}

impl QuestionKind {
    /// Check if this is a multiple-choice kind.
    pub fn is_select(&self) -> bool {
        matches!(self, Self::SelectOne(_) | Self::SelectMany(_))
    }

    /// The choices of a multiple-choice kind; empty otherwise.
    pub fn choices(&self) -> &[Choice] {
        match self {
            Self::SelectOne(choices) | Self::SelectMany(choices) => choices,
            _ => &[],
        }
    }

    /// The `type` attribute of this kind's `bind`.
    pub fn bind_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Note => "string",
            Self::Integer => "int",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::SelectOne(_) => "select1",
            Self::SelectMany(_) => "select",
        }
    }

    /// The body control element for this kind.
    pub fn control_tag(&self) -> &'static str {
        match self {
            Self::SelectOne(_) => "select1",
            Self::SelectMany(_) => "select",
            _ => "input",
        }
    }
}

/// An option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// The value stored when this choice is picked.
    pub name: String,

    /// Text shown for this choice.
    pub label: MultiLangText,
}

impl Choice {
    /// Create a new choice.
    pub fn new(name: impl Into<String>, label: impl Into<MultiLangText>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }

    fn item(&self, path: &ElementPath, ctx: &RenderContext<'_>) -> Result<Node, SurveyError> {
        Ok(Node::element("item")
            .child(ctx.text_node("label", &path.field_key("label"), &self.label)?)
            .child(Node::element("value").with_text(&self.name)))
    }
}

impl SurveyElement for Choice {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Choice
    }

    fn translation_keys(&self, path: &ElementPath) -> IndexMap<&'static str, String> {
        IndexMap::from([("label", path.field_key("label"))])
    }

    fn text(&self, field: &str) -> Option<&MultiLangText> {
        match field {
            "label" => Some(&self.label),
            _ => None,
        }
    }
}
