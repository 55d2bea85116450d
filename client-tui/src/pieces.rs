//! Piece imagery.
//!
//! A piece set maps each (kind, color) pair to an image: an identifier plus the
//! terminal art drawn for it. Built-in sets are static tables; a JSON manifest
//! can supply a custom set. Resolution failures render as an empty square.

use chess::{PieceColor, PieceKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A resolved piece image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceImage {
    /// Identifier, e.g. `glyphs/knight-white`.
    pub id: String,
    /// Full-size art, one entry per terminal row.
    pub art: Vec<String>,
    /// Single-cell fallback when the art does not fit the square.
    pub compact: String,
    /// Color variant; decides the tint the board draws it with.
    pub color: PieceColor,
}

/// Source of piece images.
pub trait ImageResolver {
    fn name(&self) -> &str;

    fn resolve(&self, kind: PieceKind, color: PieceColor) -> Option<PieceImage>;
}

const WHITE_GLYPHS: [&str; 6] = ["♙", "♘", "♗", "♖", "♕", "♔"];
const BLACK_GLYPHS: [&str; 6] = ["♟", "♞", "♝", "♜", "♛", "♚"];

/// Built-in piece sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceSet {
    /// Unicode chess symbols, outline for white and filled for black.
    #[default]
    Glyphs,
    /// ASCII letters, uppercase for white.
    Letters,
    /// Multi-row block art, tinted per color.
    Blocks,
}

impl PieceSet {
    pub const ALL: [PieceSet; 3] = [Self::Glyphs, Self::Letters, Self::Blocks];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|set| set.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Glyphs => "glyphs",
            Self::Letters => "letters",
            Self::Blocks => "blocks",
        }
    }

    fn compact(self, kind: PieceKind, color: PieceColor) -> &'static str {
        match (self, color) {
            (Self::Letters, PieceColor::White) => LETTERS_UPPER[kind.index()],
            (Self::Letters, PieceColor::Black) => LETTERS_LOWER[kind.index()],
            (_, PieceColor::White) => WHITE_GLYPHS[kind.index()],
            (_, PieceColor::Black) => BLACK_GLYPHS[kind.index()],
        }
    }

    fn art(self, kind: PieceKind, color: PieceColor) -> Vec<&'static str> {
        match self {
            Self::Glyphs | Self::Letters => vec![self.compact(kind, color)],
            Self::Blocks => block_art(kind),
        }
    }
}

const LETTERS_UPPER: [&str; 6] = ["P", "N", "B", "R", "Q", "K"];
const LETTERS_LOWER: [&str; 6] = ["p", "n", "b", "r", "q", "k"];

impl ImageResolver for PieceSet {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn resolve(&self, kind: PieceKind, color: PieceColor) -> Option<PieceImage> {
        Some(PieceImage {
            id: image_id(self.as_str(), kind, color),
            art: self.art(kind, color).into_iter().map(String::from).collect(),
            compact: self.compact(kind, color).to_string(),
            color,
        })
    }
}

fn image_id(set: &str, kind: PieceKind, color: PieceColor) -> String {
    format!("{set}/{}-{}", kind.name(), color.as_str())
}

/// Manifest key for a piece: color letter then kind letter ("wK", "bN").
pub fn manifest_key(kind: PieceKind, color: PieceColor) -> String {
    let color = match color {
        PieceColor::White => 'w',
        PieceColor::Black => 'b',
    };
    format!("{color}{}", kind.to_char_upper())
}

#[rustfmt::skip]
fn block_art(kind: PieceKind) -> Vec<&'static str> {
    // 4 lines high, fits in 9-char width
    match kind {
        PieceKind::King => vec![
            "  ✺█✺█✺  ",
            "   ███   ",
            "  -=K=-  ",
            "  █████  ",
        ],
        PieceKind::Queen => vec![
            "  ✦█✦█✦  ",
            "   ███   ",
            "  -=Q=-  ",
            "  █████  ",
        ],
        PieceKind::Rook => vec![
            "  █ █ █  ",
            "   ███   ",
            "  -=R=-  ",
            "  █████  ",
        ],
        PieceKind::Bishop => vec![
            "    ❂    ",
            "  ▓███▓  ",
            "  -=B=-  ",
            "  █████  ",
        ],
        PieceKind::Knight => vec![
            "    ◉    ",
            "   ▓██▓  ",
            "  -=N=-  ",
            "  █████  ",
        ],
        PieceKind::Pawn => vec![
            "    ●    ",
            "   ▓▓▓   ",
            "  -=P=-  ",
            "  █████  ",
        ],
    }
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    name: String,
    pieces: HashMap<String, ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: String,
    #[serde(default)]
    art: Vec<String>,
    #[serde(default)]
    compact: Option<String>,
}

/// A piece set loaded from a JSON manifest:
///
/// ```json
/// { "name": "wood", "pieces": { "wK": { "id": "wood/wK.png", "art": ["K"] } } }
/// ```
///
/// Pieces missing from the manifest resolve to nothing.
#[derive(Debug, Clone)]
pub struct ManifestResolver {
    name: String,
    images: HashMap<(PieceKind, PieceColor), PieceImage>,
}

impl ManifestResolver {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let resolver = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), name = %resolver.name, "piece manifest loaded");
        Ok(resolver)
    }

    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        let file: ManifestFile = serde_json::from_str(raw)?;

        let mut images = HashMap::new();
        for (key, entry) in file.pieces {
            let (kind, color) =
                parse_manifest_key(&key).ok_or_else(|| ManifestError::UnknownKey(key.clone()))?;
            let compact = entry
                .compact
                .unwrap_or_else(|| chess::Piece::new(kind, color).to_fen_char().to_string());
            let art = if entry.art.is_empty() {
                vec![compact.clone()]
            } else {
                entry.art
            };
            images.insert(
                (kind, color),
                PieceImage {
                    id: entry.id,
                    art,
                    compact,
                    color,
                },
            );
        }

        for color in PieceColor::ALL {
            for kind in PieceKind::ALL {
                if !images.contains_key(&(kind, color)) {
                    tracing::warn!(
                        set = %file.name,
                        piece = %manifest_key(kind, color),
                        "piece missing from manifest, it will render as an empty square"
                    );
                }
            }
        }

        Ok(Self {
            name: file.name,
            images,
        })
    }
}

impl ImageResolver for ManifestResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, kind: PieceKind, color: PieceColor) -> Option<PieceImage> {
        self.images.get(&(kind, color)).cloned()
    }
}

fn parse_manifest_key(key: &str) -> Option<(PieceKind, PieceColor)> {
    let mut chars = key.chars();
    let color = match chars.next()? {
        'w' => PieceColor::White,
        'b' => PieceColor::Black,
        _ => return None,
    };
    let kind_char = chars.next()?;
    if chars.next().is_some() || !kind_char.is_ascii_uppercase() {
        return None;
    }
    Some((PieceKind::from_char(kind_char)?, color))
}

/// The piece set chosen at startup.
#[derive(Debug, Clone)]
pub enum PieceTheme {
    Builtin(PieceSet),
    Manifest(ManifestResolver),
}

impl PieceTheme {
    /// A built-in set name, or otherwise a path to a manifest file.
    pub fn from_setting(setting: &str) -> Result<Self, ManifestError> {
        match PieceSet::from_name(setting) {
            Some(set) => Ok(Self::Builtin(set)),
            None => Ok(Self::Manifest(ManifestResolver::load(Path::new(setting))?)),
        }
    }
}

impl Default for PieceTheme {
    fn default() -> Self {
        Self::Builtin(PieceSet::default())
    }
}

impl ImageResolver for PieceTheme {
    fn name(&self) -> &str {
        match self {
            Self::Builtin(set) => set.name(),
            Self::Manifest(manifest) => manifest.name(),
        }
    }

    fn resolve(&self, kind: PieceKind, color: PieceColor) -> Option<PieceImage> {
        match self {
            Self::Builtin(set) => set.resolve(kind, color),
            Self::Manifest(manifest) => manifest.resolve(kind, color),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read piece manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid piece manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown piece key {0:?} (expected e.g. \"wK\" or \"bN\")")]
    UnknownKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_builtin_sets_have_twelve_distinct_images() {
        for set in PieceSet::ALL {
            let ids: HashSet<String> = PieceColor::ALL
                .into_iter()
                .flat_map(|color| PieceKind::ALL.into_iter().map(move |kind| (kind, color)))
                .map(|(kind, color)| set.resolve(kind, color).unwrap().id)
                .collect();
            assert_eq!(ids.len(), 12, "set {}", set.as_str());
        }
    }

    #[test]
    fn test_glyph_variants_per_color() {
        let white = PieceSet::Glyphs
            .resolve(PieceKind::King, PieceColor::White)
            .unwrap();
        let black = PieceSet::Glyphs
            .resolve(PieceKind::King, PieceColor::Black)
            .unwrap();
        assert_eq!(white.id, "glyphs/king-white");
        assert_eq!(white.compact, "♔");
        assert_eq!(black.compact, "♚");
        assert_eq!(black.color, PieceColor::Black);
    }

    #[test]
    fn test_block_art_shared_between_colors() {
        let white = PieceSet::Blocks
            .resolve(PieceKind::Rook, PieceColor::White)
            .unwrap();
        let black = PieceSet::Blocks
            .resolve(PieceKind::Rook, PieceColor::Black)
            .unwrap();
        assert_eq!(white.art, black.art);
        assert_ne!(white.id, black.id);
        assert_eq!(white.art.len(), 4);
    }

    #[test]
    fn test_manifest_partial_set_degrades_to_none() {
        let resolver = ManifestResolver::from_json(
            r#"{ "name": "wood", "pieces": {
                "wK": { "id": "wood/wK.png", "art": ["[K]"] },
                "bN": { "id": "wood/bN.png" }
            } }"#,
        )
        .unwrap();

        assert_eq!(resolver.name(), "wood");
        let king = resolver
            .resolve(PieceKind::King, PieceColor::White)
            .unwrap();
        assert_eq!(king.art, vec!["[K]".to_string()]);
        assert_eq!(king.compact, "K");

        let knight = resolver
            .resolve(PieceKind::Knight, PieceColor::Black)
            .unwrap();
        assert_eq!(knight.art, vec!["n".to_string()]);

        assert!(resolver.resolve(PieceKind::Queen, PieceColor::White).is_none());
    }

    #[test]
    fn test_manifest_rejects_unknown_key() {
        let err =
            ManifestResolver::from_json(r#"{ "name": "x", "pieces": { "wZ": { "id": "z" } } }"#)
                .unwrap_err();
        assert!(matches!(err, ManifestError::UnknownKey(key) if key == "wZ"));

        let err =
            ManifestResolver::from_json(r#"{ "name": "x", "pieces": { "wk": { "id": "z" } } }"#)
                .unwrap_err();
        assert!(matches!(err, ManifestError::UnknownKey(_)));
    }

    #[test]
    fn test_manifest_rejects_malformed_json() {
        assert!(matches!(
            ManifestResolver::from_json("{ not json"),
            Err(ManifestError::Parse(_))
        ));
    }

    #[test]
    fn test_theme_from_setting_loads_manifest_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "name": "file-set", "pieces": {{ "bQ": {{ "id": "q.png" }} }} }}"#
        )
        .unwrap();

        let theme = PieceTheme::from_setting(file.path().to_str().unwrap()).unwrap();
        assert_eq!(theme.name(), "file-set");
        assert!(theme.resolve(PieceKind::Queen, PieceColor::Black).is_some());
    }

    #[test]
    fn test_theme_from_setting_builtin_and_missing_file() {
        assert!(matches!(
            PieceTheme::from_setting("letters").unwrap(),
            PieceTheme::Builtin(PieceSet::Letters)
        ));
        assert!(matches!(
            PieceTheme::from_setting("/definitely/not/here.json"),
            Err(ManifestError::Read { .. })
        ));
    }

    #[test]
    fn test_manifest_key_format() {
        assert_eq!(manifest_key(PieceKind::Knight, PieceColor::Black), "bN");
        assert_eq!(
            parse_manifest_key("wQ"),
            Some((PieceKind::Queen, PieceColor::White))
        );
        assert_eq!(parse_manifest_key("wQQ"), None);
    }
}
