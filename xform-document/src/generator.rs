//! XForm document assembler.

use tracing::{debug, info};
use xform_survey::{
    ElementPath, MediaKind, MediaTable, Node, RenderContext, Survey, SurveyElement, SurveyError,
    Translations, XPathIndex,
};

use crate::DocumentError;

/// Namespace declarations on the document root.
pub const NAMESPACES: [(&str, &str); 5] = [
    ("xmlns", "http://www.w3.org/2002/xforms"),
    ("xmlns:h", "http://www.w3.org/1999/xhtml"),
    ("xmlns:ev", "http://www.w3.org/2001/xml-events"),
    ("xmlns:xsd", "http://www.w3.org/2001/XMLSchema"),
    ("xmlns:jr", "http://openrosa.org/javarosa"),
];

/// Options for XForm generation.
#[derive(Debug, Clone)]
pub struct XformOptions {
    /// Title for the document. Defaults to the survey title.
    pub title: Option<String>,
    /// Language of the text table written when there is media but no translation.
    pub default_language: String,
    /// Spaces per nesting level in serialized output; 0 writes a single line.
    pub indent: usize,
}

impl XformOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            default_language: "English".to_string(),
            indent: 2,
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the language of the media-only text table.
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Set the indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl Default for XformOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Tables derived from the tree during one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedTables {
    pub xpaths: XPathIndex,
    pub translations: Translations,
    pub media: MediaTable,
}

/// A rendered document together with the tables it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub document: Node,
    pub tables: DerivedTables,
}

impl Rendered {
    /// The `h:head` element.
    pub fn head(&self) -> Option<&Node> {
        self.document.find("h:head")
    }

    /// The `h:body` element.
    pub fn body(&self) -> Option<&Node> {
        self.document.find("h:body")
    }

    /// The `model` element inside the head.
    pub fn model(&self) -> Option<&Node> {
        self.head().and_then(|head| head.find("model"))
    }
}

/// Render a survey with default options.
pub fn render(survey: &Survey) -> Result<Rendered, DocumentError> {
    render_with_options(survey, &XformOptions::new())
}

/// Render a survey into an XForm markup tree.
///
/// Every call validates the tree and rebuilds the xpath index and text
/// tables from scratch; nothing is cached between calls.
pub fn render_with_options(
    survey: &Survey,
    options: &XformOptions,
) -> Result<Rendered, DocumentError> {
    info!(survey = survey.name(), "rendering survey");
    survey.validate()?;

    let tables = DerivedTables {
        xpaths: XPathIndex::build(survey),
        translations: Translations::build(survey)?,
        media: MediaTable::build(survey)?,
    };
    let ctx = RenderContext {
        xpaths: &tables.xpaths,
        translations: &tables.translations,
        media: &tables.media,
    };
    let root = ElementPath::root(survey.name());

    let title = options.title.as_deref().unwrap_or(survey.title());
    let head = Node::element("h:head")
        .child(Node::element("h:title").with_text(title))
        .child(generate_model(survey, &root, &ctx, options)?);
    let body = Node::element("h:body").children(survey.control(&root, &ctx)?);

    let document = NAMESPACES
        .iter()
        .fold(Node::element("h:html"), |html, (key, value)| {
            html.attr(*key, *value)
        })
        .child(head)
        .child(body);

    Ok(Rendered { document, tables })
}

/// Generate the `model`: an optional text table, the instance, then the binds.
fn generate_model(
    survey: &Survey,
    root: &ElementPath,
    ctx: &RenderContext<'_>,
    options: &XformOptions,
) -> Result<Node, SurveyError> {
    let mut model = Node::element("model");

    if !ctx.translations.is_empty() {
        debug!(
            languages = ctx.translations.languages().count(),
            "writing translation table"
        );
        model = model.child(generate_translations(ctx)?);
    } else if !ctx.media.is_empty() {
        debug!(keys = ctx.media.len(), "writing media table");
        model = model.child(generate_media(ctx, &options.default_language)?);
    }

    model = model.child(Node::element("instance").child(survey.instance()));
    Ok(model.children(survey.bindings(root, ctx)?))
}

/// One `translation` group per language.
fn generate_translations(ctx: &RenderContext<'_>) -> Result<Node, SurveyError> {
    let mut itext = Node::element("itext");
    for (language, texts) in ctx.translations.iter() {
        let mut translation = Node::element("translation").attr("lang", language);
        for (key, text) in texts {
            translation = translation.child(
                Node::element("text")
                    .attr("id", key)
                    .child(Node::element("value").with_text(ctx.resolve(text)?)),
            );
        }
        itext = itext.child(translation);
    }
    Ok(itext)
}

/// A single default-language `translation` carrying media references.
fn generate_media(ctx: &RenderContext<'_>, language: &str) -> Result<Node, SurveyError> {
    let mut translation = Node::element("translation").attr("lang", language);
    for (key, media) in ctx.media.iter() {
        let mut text = Node::element("text").attr("id", key);
        for (kind, value) in media {
            let value = match kind {
                MediaKind::LongText => ctx.resolve(value)?,
                _ => kind.reference(value),
            };
            text = text.child(
                Node::element("value")
                    .attr("form", kind.as_str())
                    .with_text(value),
            );
        }
        translation = translation.child(text);
    }
    Ok(Node::element("itext").child(translation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xform_options_creation() {
        let _options = XformOptions::new();
        let _with_title = XformOptions::new().with_title("Test");
        let _with_language = XformOptions::new().with_default_language("French");
        let _with_indent = XformOptions::new().with_indent(0);
        let _default = XformOptions::default();
    }

    #[test]
    fn xform_options_chaining() {
        let options = XformOptions::new()
            .with_title("Census")
            .with_default_language("Swahili")
            .with_indent(4);

        assert_eq!(options.title, Some("Census".to_string()));
        assert_eq!(options.default_language, "Swahili");
        assert_eq!(options.indent, 4);
    }

    #[test]
    fn default_options() {
        let options = XformOptions::default();
        assert_eq!(options.title, None);
        assert_eq!(options.default_language, "English");
        assert_eq!(options.indent, 2);
    }
}
