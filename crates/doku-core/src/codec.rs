//! Grid codec: the flat row-major integer form and the serde surface
//! built on it.
//!
//! A grid serializes as one flat sequence of N² integers, so the JSON
//! rendition of a single grid is a flat array and a batch is simply an
//! array of such arrays (`Vec<Grid>`). The plain-text form is one line
//! of whitespace-separated integers, row-major.

use crate::{Error, Grid};
use serde::de;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.cells().len()))?;
        for &value in self.cells() {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cells = Vec::<u8>::deserialize(deserializer)?;
        Grid::from_cells(cells).map_err(de::Error::custom)
    }
}

/// Parse the one-line text format.
pub fn from_text(input: &str) -> Result<Grid, Error> {
    let cells = input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u8>()
                .map_err(|_| Error::MalformedInput(format!("non-numeric token {token:?}")))
        })
        .collect::<Result<Vec<u8>, Error>>()?;
    Grid::from_cells(cells)
}

/// Render the one-line text format.
pub fn to_text(grid: &Grid) -> String {
    let cells: Vec<String> = grid.cells().iter().map(u8::to_string).collect();
    cells.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    const FIXED_4X4: [u8; 16] = [
        1, 2, 0, 0, //
        3, 4, 0, 0, //
        0, 0, 3, 4, //
        0, 0, 1, 2,
    ];

    #[test]
    fn test_json_single_grid_is_flat_array() {
        let grid = Grid::from_cells(FIXED_4X4.to_vec()).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[1,2,0,0,3,4,0,0,0,0,3,4,0,0,1,2]");

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cells(), grid.cells());
        assert_eq!(back.size(), 4);
    }

    #[test]
    fn test_json_batch_is_array_of_arrays() {
        let grids = vec![
            Grid::from_cells(FIXED_4X4.to_vec()).unwrap(),
            Grid::empty(2),
        ];
        let json = serde_json::to_string(&grids).unwrap();
        let back: Vec<Grid> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].cells(), grids[0].cells());
        assert!(back[1].cells().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_json_rejects_bad_shape() {
        // 9 cells means a 3×3 grid, and 3 is not a perfect square.
        assert!(serde_json::from_str::<Grid>("[0,0,0,0,0,0,0,0,0]").is_err());
        assert!(serde_json::from_str::<Grid>("[0,0,0]").is_err());
    }

    #[test]
    fn test_text_round_trip() {
        let grid = Grid::from_cells(FIXED_4X4.to_vec()).unwrap();
        let text = to_text(&grid);
        assert_eq!(text, "1 2 0 0 3 4 0 0 0 0 3 4 0 0 1 2");

        let back = from_text(&text).unwrap();
        assert_eq!(back.cells(), grid.cells());
        assert_eq!(back.get(Position::new(1, 1)), 4);
    }

    #[test]
    fn test_text_rejects_non_numeric_token() {
        let err = from_text("1 2 x 0").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(msg) if msg.contains('x')));
    }

    #[test]
    fn test_text_rejects_non_square_count() {
        let err = from_text("1 2 3 4 5").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }
}
