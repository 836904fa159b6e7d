use doku_core::Grid;
use std::fs;
use std::io;
use std::path::Path;

/// Load a grid picked by file extension: `.json` holds a flat
/// row-major array, `.txt` one line of whitespace-separated integers.
pub fn load_grid(path: &Path) -> Result<Grid, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&raw)?),
        Some("txt") => Ok(doku_core::from_text(&raw)?),
        _ => Err(Box::new(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unsupported file type: {}", path.display()),
        ))),
    }
}

/// Write grids as JSON: a single grid becomes a flat array, a batch an
/// array of flat arrays.
pub fn save_grids(path: &Path, grids: &[Grid]) -> Result<(), Box<dyn std::error::Error>> {
    let json = match grids {
        [only] => serde_json::to_string_pretty(only)?,
        many => serde_json::to_string_pretty(many)?,
    };
    fs::write(path, json)?;
    Ok(())
}
