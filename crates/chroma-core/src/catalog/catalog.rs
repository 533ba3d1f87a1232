//! Ordered named-color table with exact and nearest-color lookup.

use std::collections::HashSet;
use std::sync::OnceLock;

use super::error::CatalogError;
use super::table::NAMED_COLORS;
use crate::color::PackedColor;
use crate::parse::parse_hex;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    pub name: String,
    pub color: PackedColor,
}

/// A catalog entry together with its distance from a query color.
///
/// `distance` is the squared Euclidean distance in RGB space; only the
/// ordering matters so no square root is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDistance {
    pub name: String,
    pub color: PackedColor,
    pub distance: u32,
}

impl ColorDistance {
    /// Build an entry for `color` measured against `query`.
    pub fn measure(entry: &NamedColor, query: PackedColor) -> Self {
        Self {
            name: entry.name.clone(),
            color: entry.color,
            distance: entry.color.distance_squared(query),
        }
    }

    /// True when the catalog color is identical to the query color.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// An immutable, ordered table of named colors.
///
/// Entry order is significant: whenever two entries are equally distant
/// from a query, the one that appears first wins. Name lookups are
/// case-insensitive.
///
/// # Example
///
/// ```
/// use chroma_core::{Catalog, PackedColor};
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.lookup_by_name("red"), Some(PackedColor::from_rgb(255, 0, 0)));
///
/// let nearest = catalog.nearest(PackedColor::from_rgb(250, 5, 5), None).unwrap();
/// assert_eq!(nearest.name, "Red");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<NamedColor>,
}

impl Catalog {
    /// Build a catalog from `(name, hex)` pairs, preserving their order.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Empty`] if `entries` is empty
    /// - [`CatalogError::EmptyName`] if a name is blank
    /// - [`CatalogError::InvalidHex`] if a color is not `#RGB`/`#RRGGBB`
    /// - [`CatalogError::DuplicateName`] if two names differ only in case
    pub fn from_entries<N, H>(entries: &[(N, H)]) -> Result<Self, CatalogError>
    where
        N: AsRef<str>,
        H: AsRef<str>,
    {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut parsed = Vec::with_capacity(entries.len());

        for (index, (name, hex)) in entries.iter().enumerate() {
            let name = name.as_ref().trim();
            let hex = hex.as_ref();

            if name.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateName(name.to_string()));
            }
            let color = parse_hex(hex).ok_or_else(|| CatalogError::InvalidHex {
                name: name.to_string(),
                hex: hex.to_string(),
            })?;

            parsed.push(NamedColor {
                name: name.to_string(),
                color,
            });
        }

        Ok(Self { entries: parsed })
    }

    /// The built-in CSS/X11 catalog, initialised on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Catalog::from_entries(NAMED_COLORS).expect("built-in color table is valid")
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty catalogs are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` in table order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&NamedColor> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.entries.iter()
    }

    /// Case-insensitive exact name match.
    pub fn find_by_name(&self, name: &str) -> Option<&NamedColor> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Packed color for `name`, if the catalog has it.
    pub fn lookup_by_name(&self, name: &str) -> Option<PackedColor> {
        self.find_by_name(name).map(|entry| entry.color)
    }

    /// The entry closest to `color`.
    ///
    /// Entries whose color equals `exclude` are skipped. Ties go to the
    /// earliest entry. Returns `None` only if every entry was excluded.
    pub fn nearest(&self, color: PackedColor, exclude: Option<PackedColor>) -> Option<ColorDistance> {
        self.candidates(exclude)
            .min_by_key(|entry| entry.color.distance_squared(color))
            .map(|entry| ColorDistance::measure(entry, color))
    }

    /// The `n` entries closest to `color`, in non-decreasing distance order.
    ///
    /// Entries whose color equals `exclude` are skipped. Equal distances
    /// keep table order. Fewer than `n` entries are returned only when the
    /// catalog runs out.
    pub fn nearest_n(
        &self,
        color: PackedColor,
        n: usize,
        exclude: Option<PackedColor>,
    ) -> Vec<ColorDistance> {
        let mut ranked: Vec<ColorDistance> = self
            .candidates(exclude)
            .map(|entry| ColorDistance::measure(entry, color))
            .collect();

        // stable sort: ties stay in table order
        ranked.sort_by_key(|d| d.distance);
        ranked.truncate(n);
        ranked
    }

    fn candidates(&self, exclude: Option<PackedColor>) -> impl Iterator<Item = &NamedColor> {
        self.entries
            .iter()
            .filter(move |entry| Some(entry.color) != exclude)
    }
}
