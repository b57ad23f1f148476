use crate::result::CommonResult;
use handoff_scene::{parse_selection, Selection};
use std::io::Read;
use std::path::Path;

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Read a text source from a file, or from stdin when the path is `-`
pub fn read_source(path: &Path) -> CommonResult<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Read and parse an exported selection
pub fn load_selection(path: &Path) -> CommonResult<Selection> {
    let source = read_source(path)?;
    Ok(parse_selection(&source)?)
}
