//! Read-only view over a piece of parsed markup.
//!
//! Parsers only talk to [`Fragment`], never to the HTML engine directly, so
//! the field extraction stays independent of how the tree was built.

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractionError;

type Result<T> = std::result::Result<T, ExtractionError>;

pub trait Fragment: Sized + Clone {
    /// Every descendant matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Result<Vec<Self>>;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Concatenated text of the fragment, trimmed.
    fn text_content(&self) -> String;

    fn has_class(&self, class: &str) -> bool;

    fn select_one(&self, selector: &str) -> Result<Option<Self>> {
        Ok(self.select_all(selector)?.into_iter().next())
    }

    fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.select_one(selector)?.is_some())
    }

    fn require(&self, selector: &str) -> Result<Self> {
        self.select_one(selector)?
            .ok_or_else(|| ExtractionError::MissingElement(selector.to_string()))
    }

    fn require_text(&self, selector: &str) -> Result<String> {
        Ok(self.require(selector)?.text_content())
    }

    /// Text of the first match, `None` when nothing matches or the text is blank.
    fn optional_text(&self, selector: &str) -> Result<Option<String>> {
        Ok(self
            .select_one(selector)?
            .map(|el| el.text_content())
            .filter(|text| !text.is_empty()))
    }

    fn require_attribute(&self, name: &str) -> Result<String> {
        self.attribute(name)
            .ok_or_else(|| ExtractionError::MissingAttribute {
                selector: self.describe(),
                attribute: name.to_string(),
            })
    }

    /// Short label used in error messages.
    fn describe(&self) -> String {
        "element".to_string()
    }
}

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| ExtractionError::InvalidSelector(selector.to_string()))
}

impl Fragment for ElementRef<'_> {
    fn select_all(&self, selector: &str) -> Result<Vec<Self>> {
        let selector = parse_selector(selector)?;
        Ok(self.select(&selector).collect())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn text_content(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }

    fn describe(&self) -> String {
        let element = self.value();
        match element.classes().next() {
            Some(class) => format!("{}.{}", element.name(), class),
            None => element.name().to_string(),
        }
    }
}

/// Parses a full page; the returned tree is queried through its root element.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}
