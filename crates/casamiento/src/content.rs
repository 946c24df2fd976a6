//! Typed view of the externally-supplied content document.
//!
//! `content.json` drives every piece of text on the site, the RSVP form's
//! field list, and the modal copy. The document is authored outside this
//! repository; this module only gives it a shape the templates can render.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// The whole content document.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub typography: Typography,
    pub hero: Hero,
    pub buttons: Buttons,
    pub modals: Modals,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub primary_font: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub tag: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<HeroImage>,
    #[serde(rename = "cuandoYdonde")]
    pub cuando_y_donde: CuandoYDonde,
    pub bendicion: Bendicion,
    pub invite: String,
    pub map_note: String,
    pub gift_note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroImage {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CuandoYDonde {
    pub fecha: String,
    pub hora: String,
    pub lugar: String,
    pub localidad: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bendicion {
    pub text: String,
    pub hora: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buttons {
    pub rsvp: String,
    pub map: String,
    pub bank: String,
    pub dress_title: String,
    pub dress_value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Modals {
    pub rsvp: RsvpModal,
    pub map: MapModal,
    pub bank: BankModal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RsvpModal {
    pub title: String,
    pub intro: String,
    pub submit: String,
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapModal {
    pub title: String,
    pub destination: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankModal {
    pub title: String,
    pub text: String,
    pub bank_name: String,
    pub holder: String,
    pub cbu: String,
    pub alias: String,
}

/// A single RSVP form field, as described by the content document.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
    #[serde(default)]
    pub step: Option<u32>,
}

/// Input widget the field renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Number,
    Select,
    Textarea,
}

impl FieldDef {
    pub fn is_select(&self) -> bool {
        self.kind == FieldKind::Select
    }

    pub fn is_textarea(&self) -> bool {
        self.kind == FieldKind::Textarea
    }

    /// `type` attribute for fields rendered as an `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            _ => "text",
        }
    }
}

impl Content {
    /// Loads and deserializes the content document.
    ///
    /// The site is nothing but this content, so a failure here is fatal at
    /// startup rather than degraded at request time.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read content document {}", path.display()))?;
        let content: Content = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse content document {}", path.display()))?;
        Ok(content)
    }

    /// Resolves the hero image to a servable URL path.
    ///
    /// The content document historically uses `@/assets/images/...` aliases
    /// from its original authoring tool; those map onto the `/images` route.
    pub fn hero_image_src(&self) -> String {
        let raw = self
            .hero
            .image
            .as_ref()
            .map(|image| image.src.as_str())
            .unwrap_or_default();
        if raw.is_empty() {
            return String::new();
        }
        if let Some(without_alias) = raw.strip_prefix("@/") {
            let without_alias = without_alias.trim_start_matches('/');
            if let Some(file) = without_alias.strip_prefix("assets/images/") {
                return format!("/images/{file}");
            }
            return format!("/{without_alias}");
        }
        raw.to_string()
    }

    pub fn hero_image_alt(&self) -> &str {
        self.hero
            .image
            .as_ref()
            .and_then(|image| image.alt.as_deref())
            .unwrap_or("Imagen principal")
    }
}
