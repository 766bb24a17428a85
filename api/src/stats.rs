/// stats.nba.com raw wire types — serde shapes for the tabular `resultSets` payloads.
/// Rows are normalized into header-keyed maps by the decoder in table.rs.
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Most endpoints wrap their tables in `resultSets`; `leagueleaders` sends a
/// single `resultSet` object instead.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
    #[serde(rename = "resultSet")]
    pub result_set: Option<ResultSet>,
}

impl StatsResponse {
    /// Every table in the payload, `resultSets` first.
    pub fn sets(&self) -> impl Iterator<Item = &ResultSet> {
        self.result_sets.iter().chain(self.result_set.iter())
    }

    /// Owned copy of every table, in `sets()` order.
    pub fn into_sets(self) -> Vec<ResultSet> {
        let mut sets = self.result_sets;
        sets.extend(self.result_set);
        sets
    }

    pub fn find(&self, name: &str) -> Option<&ResultSet> {
        self.sets().find(|s| s.name == name)
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub rows: Vec<Vec<Cell>>,
}

/// One raw table cell. The stats API mixes ints, floats, strings and nulls in
/// the same row, so each cell keeps its literal JSON type.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Str(String),
    Null,
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Display text of the cell. Floats use the shortest round-trip form and
    /// always carry a fractional part (`45.0`, not `45`). Magnitudes below
    /// `1e-4` or from `1e16` up switch to exponent form (`1e-7`, `1e21`).
    pub fn to_display_string(&self) -> String {
        match self {
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => format!("{f:?}"),
            Cell::Str(s) => s.clone(),
            Cell::Null => String::new(),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CellVisitor)
    }
}

struct CellVisitor;

impl<'de> Visitor<'de> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer, float, string or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Cell, E> {
        Ok(Cell::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Cell, E> {
        // Past i64::MAX the integer read fails and the float read takes over.
        Ok(i64::try_from(v).map(Cell::Int).unwrap_or(Cell::Float(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Cell, E> {
        Ok(Cell::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Cell, E> {
        Ok(Cell::Str(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Cell, E> {
        Ok(Cell::Str(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Cell, E> {
        Ok(Cell::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Cell, E> {
        Ok(Cell::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_keep_their_json_type() {
        let row: Vec<Cell> =
            serde_json::from_str(r#"[3, 0.456, "08", null, -12, 45.0]"#).unwrap();
        assert_eq!(
            row,
            vec![
                Cell::Int(3),
                Cell::Float(0.456),
                Cell::Str("08".into()),
                Cell::Null,
                Cell::Int(-12),
                Cell::Float(45.0),
            ]
        );
    }

    #[test]
    fn huge_unsigned_falls_back_to_float() {
        let cell: Cell = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(cell, Cell::Float(_)));
    }

    #[test]
    fn booleans_are_rejected() {
        assert!(serde_json::from_str::<Cell>("true").is_err());
    }

    #[test]
    fn display_strings() {
        assert_eq!(Cell::Int(110).to_display_string(), "110");
        assert_eq!(Cell::Float(45.0).to_display_string(), "45.0");
        assert_eq!(Cell::Float(0.5).to_display_string(), "0.5");
        assert_eq!(Cell::Float(1e-7).to_display_string(), "1e-7");
        assert_eq!(Cell::Float(1e21).to_display_string(), "1e21");
        assert_eq!(Cell::Str("LAL".into()).to_display_string(), "LAL");
        assert_eq!(Cell::Null.to_display_string(), "");
    }

    #[test]
    fn envelope_accepts_single_result_set() {
        let raw = r#"{"resultSet": {"name": "LeagueLeaders", "headers": ["PLAYER"], "rowSet": [["Luka Doncic"]]}}"#;
        let resp: StatsResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.result_sets.is_empty());
        assert_eq!(resp.sets().count(), 1);
        assert_eq!(resp.find("LeagueLeaders").map(|s| s.rows.len()), Some(1));
    }

    #[test]
    fn envelope_keeps_result_set_order() {
        let raw = r#"{"resultSets": [
            {"name": "GameHeader", "headers": [], "rowSet": []},
            {"name": "LineScore", "headers": [], "rowSet": []}
        ]}"#;
        let resp: StatsResponse = serde_json::from_str(raw).unwrap();
        let names: Vec<String> = resp.into_sets().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["GameHeader", "LineScore"]);
    }
}
