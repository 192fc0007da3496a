//! Star table reader.
//!
//! Reads the delimited layout VizieR returns for ASU-TSV requests and that
//! the bundled catalog file uses:
//!
//! ```text
//! #RESOURCE=yCat_1239
//! HIP	RAICRS	DEICRS	Vmag
//!  	deg	deg	mag
//! ------	------------	------------	-----
//! 32349	101.28715539	-16.71611582	-1.44
//! ```
//!
//! The delimiter (tab, semicolon or comma) is taken from the header line.
//! Comment lines, blank lines, the units line right after the header and
//! dash separator lines are skipped. Rows without a magnitude are dropped;
//! any other malformed row fails the whole table.

use crate::error::{AstroError, AstroResult};
use crate::models::{CatalogStar, EquatorialCoordinate, HipId};

const ID_COLUMNS: &[&str] = &["hip"];
const RA_COLUMNS: &[&str] = &["raicrs", "ra_icrs", "ra", "_raj2000", "raj2000"];
const DEC_COLUMNS: &[&str] = &["deicrs", "de_icrs", "dec", "de", "_dej2000", "dej2000"];
const MAG_COLUMNS: &[&str] = &["vmag", "v"];

#[derive(Debug, Clone, Copy)]
struct Layout {
    delimiter: char,
    id: usize,
    ra: usize,
    dec: usize,
    mag: usize,
}

impl Layout {
    fn from_header(line: &str, source: &str) -> AstroResult<Self> {
        let delimiter = ['\t', ';', ',']
            .into_iter()
            .find(|d| line.contains(*d))
            .unwrap_or('\t');
        let names: Vec<String> = line
            .split(delimiter)
            .map(|name| name.trim().to_ascii_lowercase())
            .collect();

        let find = |candidates: &[&str], what: &str| {
            names
                .iter()
                .position(|name| candidates.contains(&name.as_str()))
                .ok_or_else(|| {
                    AstroError::CatalogUnavailable(format!(
                        "{}: header has no {} column ({})",
                        source,
                        what,
                        line.trim()
                    ))
                })
        };

        Ok(Self {
            delimiter,
            id: find(ID_COLUMNS, "HIP")?,
            ra: find(RA_COLUMNS, "right ascension")?,
            dec: find(DEC_COLUMNS, "declination")?,
            mag: find(MAG_COLUMNS, "Vmag")?,
        })
    }

    fn cell<'a>(&self, cells: &[&'a str], index: usize) -> &'a str {
        cells.get(index).map(|c| c.trim()).unwrap_or("")
    }
}

fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c == '-' || c == '\t' || c == ' ' || c == ';' || c == ',')
}

/// Parse a star table. `source` names the input in error messages.
pub fn parse_star_table(text: &str, source: &str) -> AstroResult<Vec<CatalogStar>> {
    let mut layout: Option<Layout> = None;
    let mut after_header = false;
    let mut stars = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        if raw.trim().is_empty() || raw.trim_start().starts_with('#') || is_separator(raw) {
            continue;
        }

        let Some(layout) = layout else {
            layout = Some(Layout::from_header(raw, source)?);
            after_header = true;
            continue;
        };

        let cells: Vec<&str> = raw.split(layout.delimiter).collect();
        let id_cell = layout.cell(&cells, layout.id);

        if after_header {
            after_header = false;
            if id_cell.parse::<u32>().is_err() {
                // Units line
                continue;
            }
        }

        let mag_cell = layout.cell(&cells, layout.mag);
        if mag_cell.is_empty() {
            continue;
        }

        let bad = |what: &str, value: &str| {
            AstroError::CatalogUnavailable(format!(
                "{} line {}: invalid {} '{}'",
                source, line_no, what, value
            ))
        };

        let id: u32 = id_cell.parse().map_err(|_| bad("HIP", id_cell))?;
        let ra_cell = layout.cell(&cells, layout.ra);
        let dec_cell = layout.cell(&cells, layout.dec);
        let ra: f64 = ra_cell.parse().map_err(|_| bad("right ascension", ra_cell))?;
        let dec: f64 = dec_cell.parse().map_err(|_| bad("declination", dec_cell))?;
        let magnitude: f64 = mag_cell.parse().map_err(|_| bad("Vmag", mag_cell))?;

        let position = EquatorialCoordinate::new(ra, dec).map_err(|e| {
            AstroError::CatalogUnavailable(format!("{} line {}: {}", source, line_no, e))
        })?;
        stars.push(CatalogStar::new(HipId(id), position, magnitude));
    }

    if layout.is_none() {
        return Err(AstroError::CatalogUnavailable(format!(
            "{}: no header line found",
            source
        )));
    }

    Ok(stars)
}
