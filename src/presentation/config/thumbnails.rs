use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize};

use super::styles::parse_style;
use crate::{domain::post::ImageId, presentation::widgets::thumbnail::Thumbnail};

/// Resolves opaque image references into something drawable.
pub trait ImageSource {
    fn resolve(&self, id: &ImageId) -> Option<Thumbnail>;

    /// Like `resolve`, but never fails: unknown images get the placeholder.
    fn thumbnail_or_placeholder(&self, id: &ImageId) -> Thumbnail {
        self.resolve(id).unwrap_or_else(|| {
            log::debug!("no thumbnail for {id}, using placeholder");
            Thumbnail::placeholder()
        })
    }
}

#[derive(Debug, Deserialize)]
struct ThumbnailEntry {
    glyph: String,
    #[serde(default)]
    style: String,
}

/// Thumbnail table keyed by image id, as configured under `thumbnails`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Thumbnails(pub HashMap<ImageId, Thumbnail>);

impl<'de> Deserialize<'de> for Thumbnails {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<ImageId, ThumbnailEntry>::deserialize(deserializer)?;

        let thumbnails = parsed_map
            .into_iter()
            .map(|(id, entry)| {
                if entry.glyph.is_empty() {
                    return Err(serde::de::Error::custom(format!(
                        "thumbnail {id} has an empty glyph"
                    )));
                }
                Ok((id, Thumbnail::new(entry.glyph, parse_style(&entry.style))))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Thumbnails(thumbnails))
    }
}

impl ImageSource for Thumbnails {
    fn resolve(&self, id: &ImageId) -> Option<Thumbnail> {
        self.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Style};

    use super::*;

    #[test]
    fn test_resolve_known_image() -> Result<(), json5::Error> {
        let thumbnails: Thumbnails =
            json5::from_str(r#"{ "thumbnail_1": { "glyph": "▚", "style": "blue" } }"#)?;

        assert_eq!(
            thumbnails.resolve(&ImageId::from("thumbnail_1")),
            Some(Thumbnail::new("▚", Style::default().fg(Color::Blue)))
        );
        Ok(())
    }

    #[test]
    fn test_unknown_image_gets_placeholder() {
        let thumbnails = Thumbnails::default();
        let id = ImageId::from("thumbnail_404");

        assert_eq!(thumbnails.resolve(&id), None);
        assert_eq!(
            thumbnails.thumbnail_or_placeholder(&id),
            Thumbnail::placeholder()
        );
    }

    #[test]
    fn test_empty_glyph_is_rejected() {
        let result: Result<Thumbnails, _> =
            json5::from_str(r#"{ "thumbnail_1": { "glyph": "" } }"#);
        assert!(result.is_err());
    }
}
