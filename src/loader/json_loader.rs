use crate::error::Error;
use crate::map::{MapCellData, MapRowData};
use serde::Deserialize;
use std::path::Path;

// Raw JSON shapes; field names follow the serialized form the engine's
// map data has always used.
#[derive(Deserialize)]
struct JsonCell {
    #[serde(rename = "tileID", default)]
    tile_id: u32,
    #[serde(rename = "heightTiles", default)]
    height_tiles: Vec<u32>,
    #[serde(rename = "topperTiles", default)]
    topper_tiles: Vec<u32>,
}

#[derive(Deserialize)]
struct JsonRow {
    #[serde(default)]
    columns: Vec<JsonCell>,
}

#[derive(Deserialize)]
struct JsonMapData {
    #[serde(default)]
    rows: Vec<JsonRow>,
}

/// Decodes map data from a JSON string.
///
/// The decoder only validates shape; whether the data fits a particular
/// map grid is checked when the map is built from it.
pub fn decode_map_data_str(text: &str) -> Result<Vec<MapRowData>, Error> {
    let raw: JsonMapData = serde_json::from_str(text)?;
    Ok(raw
        .rows
        .into_iter()
        .map(|row| MapRowData {
            columns: row
                .columns
                .into_iter()
                .map(|cell| MapCellData {
                    tile_id: cell.tile_id,
                    height_tiles: cell.height_tiles,
                    topper_tiles: cell.topper_tiles,
                })
                .collect(),
        })
        .collect())
}

/// Decodes map data from a JSON file on disk.
pub fn decode_map_data_file(path: impl AsRef<Path>) -> Result<Vec<MapRowData>, Error> {
    let text = std::fs::read_to_string(path)?;
    decode_map_data_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_cells_with_defaults() {
        let data = decode_map_data_str(
            r#"{ "rows": [ { "columns": [
                { "tileID": 3, "heightTiles": [54, 53], "topperTiles": [114] },
                {}
            ] } ] }"#,
        )
        .unwrap();

        assert_eq!(data.len(), 1);
        assert_eq!(data[0].columns[0].tile_id, 3);
        assert_eq!(data[0].columns[0].height_tiles, vec![54, 53]);
        assert_eq!(data[0].columns[0].topper_tiles, vec![114]);
        assert_eq!(data[0].columns[1].tile_id, 0);
        assert!(data[0].columns[1].height_tiles.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = decode_map_data_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
