//! Image transform options and their proxy query mapping.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A transform parameter written as either a flag or a number.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Number(f64),
}

/// Optional transform parameters for the image proxy.
///
/// Absent keys take the proxy's own defaults. Unknown keys are ignored
/// when deserializing template-supplied options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: Option<u32>,
    /// `true` for the proxy's default radius, or an explicit radius.
    pub blur: Option<OptionValue>,
    pub grayscale: Option<bool>,
    /// Overrides applied only to the lazyload placeholder.
    pub placeholder: Option<Box<ImageOptions>>,
    /// Skip the placeholder entirely (`full == placeholder`).
    pub disable: bool,
}

impl ImageOptions {
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_quality(mut self, quality: u32) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_blur(mut self, blur: OptionValue) -> Self {
        self.blur = Some(blur);
        self
    }

    /// Defaults for lazyload placeholders: `{blur: 5, quality: 50}`.
    pub fn placeholder_defaults() -> Self {
        Self::default()
            .with_blur(OptionValue::Number(5.0))
            .with_quality(50)
    }

    /// Transform parameters only, without the `disable`/`placeholder` controls.
    pub fn transform(&self) -> Self {
        Self {
            placeholder: None,
            disable: false,
            ..self.clone()
        }
    }

    /// Placeholder option set: `placeholder` overrides merged over the
    /// placeholder defaults, controls stripped.
    pub fn placeholder_options(&self) -> Self {
        let defaults = Self::placeholder_defaults();
        match &self.placeholder {
            Some(overrides) => overrides.transform().merged_over(&defaults),
            None => defaults,
        }
    }

    /// Fields set on `self` win; unset fields fall back to `base`.
    pub fn merged_over(&self, base: &Self) -> Self {
        Self {
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            quality: self.quality.or(base.quality),
            blur: self.blur.or(base.blur),
            grayscale: self.grayscale.or(base.grayscale),
            placeholder: self.placeholder.clone().or_else(|| base.placeholder.clone()),
            disable: self.disable || base.disable,
        }
    }

    /// Proxy query parameters, sorted by key.
    ///
    /// `None` values are bare flags. False flags are dropped.
    pub fn query_pairs(&self) -> BTreeMap<&'static str, Option<String>> {
        let mut pairs = BTreeMap::new();

        if let Some(width) = self.width {
            pairs.insert("w", Some(width.to_string()));
        }
        if let Some(height) = self.height {
            pairs.insert("h", Some(height.to_string()));
        }
        if let Some(quality) = self.quality {
            pairs.insert("q", Some(quality.to_string()));
        }
        match self.blur {
            Some(OptionValue::Flag(true)) => {
                pairs.insert("blur", None);
            }
            Some(OptionValue::Number(radius)) => {
                pairs.insert("blur", Some(format_number(radius)));
            }
            Some(OptionValue::Flag(false)) | None => {}
        }
        if self.grayscale == Some(true) {
            pairs.insert("filt", Some("greyscale".to_string()));
        }

        pairs
    }
}

/// Integral values print without a fractional part (`5`, not `5.0`).
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
