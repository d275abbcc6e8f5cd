//! Bill-of-materials text parser.

use cutlist_core::{Material, Part, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// `<qty> x <width> (x|*) <height>`, digits only, separators case-insensitive.
///
/// The quantity may follow a letter directly (`Lateral2x 700x500`).
const LINE_PATTERN: &str = r"(?i)(\d+)\s*x\s*(\d+)\s*[x*]\s*(\d+)";

/// Grain names that mark a line as wood-grain board.
pub const DEFAULT_WOOD_KEYWORDS: &[&str] = &[
    "freijó",
    "freijo",
    "amadeirado",
    "carvalho",
    "nogueira",
    "louro",
];

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LINE_PATTERN).expect("BOM line pattern is valid"))
}

/// Parser for free-form cut lists such as
///
/// ```text
/// Lateral: 2x 700x500 freijó
/// Prateleira: 3 x 560*300
/// ```
///
/// Lines without a dimension triple are skipped, since BOM text routinely
/// mixes headings, hardware and notes with the panel list.
#[derive(Debug, Clone)]
pub struct BomParser {
    wood_keywords: Vec<String>,
}

impl Default for BomParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BomParser {
    /// Creates a parser with [`DEFAULT_WOOD_KEYWORDS`].
    pub fn new() -> Self {
        Self {
            wood_keywords: DEFAULT_WOOD_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    /// Adds extra wood-grain keywords (matched case-insensitively).
    pub fn with_wood_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.wood_keywords
            .extend(keywords.into_iter().map(|k| k.as_ref().to_lowercase()));
        self
    }

    /// Parses every matching line of `text` into a part.
    ///
    /// Ids are `P1`, `P2`, ... in extraction order.
    pub fn parse(&self, text: &str) -> Vec<Part> {
        let mut parts = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            match self.parse_line(line, parts.len() + 1) {
                Some(part) => parts.push(part),
                None => log::trace!("skipping BOM line {}: {:?}", line_no + 1, line),
            }
        }
        log::debug!("extracted {} part(s)", parts.len());
        parts
    }

    /// Reads and parses a BOM file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Part>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse(&content))
    }

    /// Parses one line as the `index`-th part (1-based).
    ///
    /// Returns `None` for lines without a dimension triple and for triples
    /// with a zero or out-of-range number.
    pub fn parse_line(&self, line: &str, index: usize) -> Option<Part> {
        let caps = line_regex().captures(line)?;
        let quantity: u32 = caps[1].parse().ok()?;
        let a: u32 = caps[2].parse().ok()?;
        let b: u32 = caps[3].parse().ok()?;
        if quantity == 0 || a == 0 || b == 0 {
            return None;
        }

        let (width, height) = if a >= b { (a, b) } else { (b, a) };

        Some(
            Part::new(format!("P{}", index), width, height)
                .with_name(part_name(&line[..caps.get(0)?.start()], index))
                .with_quantity(quantity)
                .with_material(self.classify(line)),
        )
    }

    /// `Wood` if the line names a wood grain, `White` otherwise.
    pub fn classify(&self, line: &str) -> Material {
        let lower = line.to_lowercase();
        if self.wood_keywords.iter().any(|k| lower.contains(k.as_str())) {
            Material::Wood
        } else {
            Material::White
        }
    }
}

/// Text before the first `:` of `prefix` (the part of the line ahead of the
/// dimensions), or `Part {index}` when there is none.
fn part_name(prefix: &str, index: usize) -> String {
    prefix
        .split_once(':')
        .map(|(name, _)| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Part {}", index))
}

/// Extracts parts from BOM text with the default parser.
pub fn extract(text: &str) -> Vec<Part> {
    BomParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_wood_line() {
        let parts = extract("Lateral: 2x 700x500 freijó");

        assert_eq!(parts.len(), 1);
        let p = &parts[0];
        assert_eq!(p.id(), "P1");
        assert_eq!(p.name(), "Lateral");
        assert_eq!(p.quantity(), 2);
        assert_eq!((p.width(), p.height()), (700, 500));
        assert_eq!(p.material(), Material::Wood);
    }

    #[test]
    fn test_parse_star_separator_and_spacing() {
        let parts = extract("Prateleira: 3 x 560*300");
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].quantity(), 3);
        assert_eq!((parts[0].width(), parts[0].height()), (560, 300));
        assert_eq!(parts[0].material(), Material::White);
    }

    #[test]
    fn test_uppercase_separators() {
        let parts = extract("4X300X200");
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].quantity(), 4);
        assert_eq!((parts[0].width(), parts[0].height()), (300, 200));
    }

    #[test]
    fn test_width_normalized_to_longer_side() {
        let parts = extract("Porta: 1x400x900 amadeirado");
        assert_eq!((parts[0].width(), parts[0].height()), (900, 400));
        assert_eq!(parts[0].material(), Material::Wood);
    }

    #[test]
    fn test_non_matching_lines_skipped() {
        let text = "Projeto cozinha\n\
                    Base: 2x 800x560\n\
                    Dobradiças 35mm (10 un)\n\
                    \n\
                    Fundo: 1x 780x540";
        let parts = extract(text);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].id(), "P1");
        assert_eq!(parts[0].name(), "Base");
        assert_eq!(parts[1].id(), "P2");
        assert_eq!(parts[1].name(), "Fundo");
    }

    #[test]
    fn test_empty_text() {
        assert!(extract("").is_empty());
        assert!(extract("no dimensions here").is_empty());
    }

    #[test]
    fn test_fallback_name() {
        let parts = extract("2x 300x200\n   : 1x100x50");
        assert_eq!(parts[0].name(), "Part 1");
        assert_eq!(parts[1].name(), "Part 2");
    }

    #[test]
    fn test_quantity_glued_to_name() {
        let parts = extract("Lateral2x 700x500");
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].quantity(), 2);
        assert_eq!((parts[0].width(), parts[0].height()), (700, 500));
    }

    #[test]
    fn test_colon_after_dimensions_is_not_a_name() {
        let parts = extract("2x 300x200 obs: fita nas bordas\nTampo: 1x 900x600 obs: polir");
        assert_eq!(parts[0].name(), "Part 1");
        assert_eq!(parts[1].name(), "Tampo");
    }

    #[test]
    fn test_zero_values_skipped() {
        assert!(extract("0x 300x200").is_empty());
        assert!(extract("2x 0x200").is_empty());
        assert!(extract("2x 300x0").is_empty());
    }

    #[test]
    fn test_overflowing_number_skipped() {
        assert!(extract("1x 99999999999x200").is_empty());
    }

    #[test]
    fn test_accented_keyword_uppercase() {
        let parser = BomParser::new();
        assert_eq!(parser.classify("LATERAL FREIJÓ"), Material::Wood);
        assert_eq!(parser.classify("Lateral branco"), Material::White);
    }

    #[test]
    fn test_custom_keywords() {
        let parser = BomParser::new().with_wood_keywords(["Cumaru"]);
        let parts = parser.parse("Tampo: 1x 1200x600 cumaru");
        assert_eq!(parts[0].material(), Material::Wood);
    }

    #[test]
    fn test_parse_file_missing() {
        let parser = BomParser::new();
        let err = parser.parse_file("/nonexistent/cutlist/bom.txt").unwrap_err();
        assert!(matches!(err, cutlist_core::Error::Io(_)));
    }
}
