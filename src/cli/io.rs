//! JSON output for CLI commands

use std::io::Write;

use serde::Serialize;

use super::errors::CliResult;

/// Write each value as one JSON line
pub fn write_json_lines<W, T>(writer: &mut W, values: &[T]) -> CliResult<()>
where
    W: Write,
    T: Serialize,
{
    for value in values {
        serde_json::to_writer(&mut *writer, value)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_lines() {
        let mut out = Vec::new();
        write_json_lines(&mut out, &[json!({"a": 1}), json!({"b": 2})]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "{\"a\":1}\n{\"b\":2}\n");
    }
}
