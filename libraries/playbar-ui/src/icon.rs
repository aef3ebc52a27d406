//! Vector glyphs
//!
//! Every glyph is a single path on a 24x24 grid, scaled to the requested
//! pixel size when rendered.

use serde::Serialize;

/// Glyphs used by the play bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    Play,
    Pause,
    SkipPrevious,
    SkipNext,
    Volume,
    VolumeMute,
}

impl Icon {
    /// SVG path data on the 24x24 grid
    pub fn path(self) -> &'static str {
        match self {
            Icon::Play => "M8 5v14l11-7z",
            Icon::Pause => "M6 19h4V5H6v14zm8-14v14h4V5h-4z",
            Icon::SkipPrevious => "M6 6h2v12H6zm3.5 6l8.5 6V6z",
            Icon::SkipNext => "M6 18l8.5-6L6 6v12zM16 6v12h2V6h-2z",
            Icon::Volume => {
                "M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 7-4.49 7-8.77s-2.99-7.86-7-8.77z"
            }
            Icon::VolumeMute => {
                "M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.21l2.45 2.45c.03-.2.05-.41.05-.63zm2.5 0c0 .94-.2 1.82-.54 2.64l1.51 1.51C20.63 14.91 21 13.5 21 12c0-4.28-2.99-7.86-7-8.77v2.06c2.89.86 5 3.54 5 6.71zM4.27 3L3 4.27 7.73 9H3v6h4l5 5v-6.73l4.25 4.25c-.67.52-1.42.93-2.25 1.18v2.06c1.38-.31 2.63-.95 3.69-1.81L19.73 21 21 19.73l-9-9L4.27 3zM12 4L9.91 6.09 12 8.18V4z"
            }
        }
    }

    /// Display name, also used as the accessible label
    pub fn name(self) -> &'static str {
        match self {
            Icon::Play => "Play",
            Icon::Pause => "Pause",
            Icon::SkipPrevious => "SkipPrevious",
            Icon::SkipNext => "SkipNext",
            Icon::Volume => "Volume",
            Icon::VolumeMute => "VolumeMute",
        }
    }

    /// This glyph rendered `size` pixels square
    pub fn at(self, size: u32) -> IconView {
        IconView { icon: self, size }
    }
}

/// A glyph at a concrete size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconView {
    pub icon: Icon,
    pub size: u32,
}

impl IconView {
    /// Standalone `<svg>` element
    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg class="Icon" width="{size}" height="{size}" viewBox="0 0 24 24" aria-label="{name}"><path d="{path}"/></svg>"#,
            size = self.size,
            name = self.icon.name(),
            path = self.icon.path(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_uses_requested_size_on_fixed_grid() {
        let svg = Icon::Play.at(32).to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="32" height="32""#));
        assert!(svg.contains(r#"viewBox="0 0 24 24""#));
        assert!(svg.contains(r#"d="M8 5v14l11-7z""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn every_glyph_has_distinct_path() {
        let all = [
            Icon::Play,
            Icon::Pause,
            Icon::SkipPrevious,
            Icon::SkipNext,
            Icon::Volume,
            Icon::VolumeMute,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(a.path().starts_with('M'));
            for b in &all[i + 1..] {
                assert_ne!(a.path(), b.path(), "{:?} and {:?} share a path", a, b);
            }
        }
    }
}
