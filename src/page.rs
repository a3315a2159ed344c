//! In-memory model of the documentation page.
//!
//! Holds exactly the parts of the markup the language switcher reads or
//! writes: the picker entries, the per-locale content blocks, the current
//! language label and the navbar labels. Pages can be described in JSON,
//! which is how the binaries take them as input and print them as output.

use crate::i18n::{Locale, LocaleRegistry};
use crate::render::RenderPort;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Prefix of content block ids when the page does not name one.
pub const DEFAULT_CONTENT_ID_PREFIX: &str = "content_";

fn default_content_id_prefix() -> String {
    DEFAULT_CONTENT_ID_PREFIX.to_string()
}

/// One clickable entry of the language picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerEntry {
    /// Raw `data-lang` attribute; may name a locale the site does not support
    pub lang: String,

    #[serde(default)]
    pub active: bool,
}

/// The subtree holding one locale's translated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: String,

    #[serde(default)]
    pub visible: bool,
}

/// The current-language display next to the picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageLabel {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_src: Option<String>,
}

/// Navbar section labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLabels {
    pub docs: String,
    pub getting_started: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default = "default_content_id_prefix")]
    pub content_id_prefix: String,

    #[serde(default)]
    pub picker: Vec<PickerEntry>,

    #[serde(default)]
    pub content: Vec<ContentBlock>,

    #[serde(default)]
    pub selected_lang: LanguageLabel,

    #[serde(default)]
    pub nav: NavLabels,
}

impl Default for Page {
    fn default() -> Self {
        Self::for_locales(DEFAULT_CONTENT_ID_PREFIX)
    }
}

impl Page {
    /// Build a page with one picker entry and one content block per supported
    /// locale. Nothing is active or visible and the labels are empty until a
    /// switcher renders into it.
    pub fn for_locales(content_id_prefix: &str) -> Self {
        let picker = LocaleRegistry::list_all()
            .map(|config| PickerEntry {
                lang: config.locale.code().to_string(),
                active: false,
            })
            .collect();

        let content = Locale::ALL
            .into_iter()
            .map(|locale| ContentBlock {
                id: locale.content_id(content_id_prefix),
                visible: false,
            })
            .collect();

        Self {
            content_id_prefix: content_id_prefix.to_string(),
            picker,
            content,
            selected_lang: LanguageLabel::default(),
            nav: NavLabels::default(),
        }
    }

    /// Parse a page description from JSON.
    ///
    /// A description without `content_id_prefix` gets `default_prefix`; a
    /// prefix named in the description always wins.
    pub fn from_json_str(json: &str, default_prefix: &str) -> Result<Self> {
        let mut value: Value =
            serde_json::from_str(json).context("Failed to parse page description")?;
        if let Some(fields) = value.as_object_mut() {
            fields
                .entry("content_id_prefix")
                .or_insert_with(|| Value::String(default_prefix.to_string()));
        }
        serde_json::from_value(value).context("Failed to parse page description")
    }

    /// Load a page description from a JSON file.
    pub fn load(path: impl AsRef<Path>, default_prefix: &str) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page file {}", path.display()))?;
        Self::from_json_str(&json, default_prefix)
            .with_context(|| format!("Invalid page file {}", path.display()))
    }

    /// The page together with the rendered current-language markup.
    pub fn snapshot(&self) -> PageSnapshot<'_> {
        PageSnapshot {
            page: self,
            selected_lang_html: self.selected_lang_html(),
        }
    }

    /// `data-lang` values of the active picker entries.
    pub fn active_langs(&self) -> Vec<&str> {
        self.picker
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.lang.as_str())
            .collect()
    }

    /// Ids of the visible content blocks.
    pub fn visible_block_ids(&self) -> Vec<&str> {
        self.content
            .iter()
            .filter(|block| block.visible)
            .map(|block| block.id.as_str())
            .collect()
    }

    /// The content block for `locale`, if the page has one.
    pub fn block_for(&self, locale: Locale) -> Option<&ContentBlock> {
        let id = locale.content_id(&self.content_id_prefix);
        self.content.iter().find(|block| block.id == id)
    }

    /// Markup of the current-language display: the flag icon, when known,
    /// followed by the label.
    pub fn selected_lang_html(&self) -> String {
        match &self.selected_lang.flag_src {
            Some(src) => {
                let text = escape_html(&self.selected_lang.text);
                format!(
                    r#"<img class="flag" src="{}" alt="{}"> {}"#,
                    escape_html(src),
                    text,
                    text
                )
            }
            None => escape_html(&self.selected_lang.text),
        }
    }
}

/// Output of the switcher binary: the page state plus the markup of the
/// current-language display.
#[derive(Debug, Serialize)]
pub struct PageSnapshot<'a> {
    pub page: &'a Page,
    pub selected_lang_html: String,
}

impl PageSnapshot<'_> {
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize page")
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

impl RenderPort for Page {
    fn set_active_picker(&mut self, locale: Locale) {
        // Only the first matching entry, even if the markup repeats a locale
        let mut marked = false;
        for entry in &mut self.picker {
            entry.active = !marked && entry.lang == locale.code();
            marked |= entry.active;
        }
    }

    fn set_visible_content(&mut self, locale: Locale) {
        let id = locale.content_id(&self.content_id_prefix);
        for block in &mut self.content {
            block.visible = block.id == id;
        }
    }

    fn render_labels(&mut self, locale: Locale) {
        let config = locale.config();
        self.selected_lang = LanguageLabel {
            text: config.strings.lang_label.to_string(),
            flag_src: Some(config.flag_img_src.to_string()),
        };
        self.nav = NavLabels {
            docs: config.strings.docs_lbl.to_string(),
            getting_started: config.strings.getting_started_lbl.to_string(),
        };
    }
}
