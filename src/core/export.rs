use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::model::OrderRow;

/// Writes the result set to `path`, one `", "`-joined line per row, in row
/// order. The file is truncated first; repeating the call with the same
/// rows reproduces the same content. An empty result set leaves the target
/// untouched.
pub fn write_rows(rows: &[OrderRow], path: &Path) -> io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for row in rows {
        writeln!(writer, "{}", row.to_line())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(values: &[&str]) -> OrderRow {
        OrderRow {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_write_rows_one_line_per_row_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let rows = vec![
            row(&["7", "North", "2024-01-01 10:15:00"]),
            row(&["8", "North", "2024-01-01 10:20:00"]),
        ];
        write_rows(&rows, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "7, North, 2024-01-01 10:15:00\n8, North, 2024-01-01 10:20:00\n"
        );
    }

    #[test]
    fn test_write_rows_overwrites_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let first = vec![row(&["1", "North"]), row(&["2", "North"])];
        let second = vec![row(&["3", "South"])];

        write_rows(&first, &path).unwrap();
        write_rows(&second, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "3, South\n");
    }

    #[test]
    fn test_write_rows_twice_equals_single_invocation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let rows = vec![row(&["7", "North"])];
        write_rows(&rows, &path).unwrap();
        write_rows(&rows, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "7, North\n");
    }

    #[test]
    fn test_write_rows_empty_set_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        std::fs::write(&path, "previous results\n").unwrap();

        write_rows(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "previous results\n");

        let absent = temp_dir.path().join("never_created.txt");
        write_rows(&[], &absent).unwrap();
        assert!(!absent.exists());
    }

    #[test]
    fn test_write_rows_unwritable_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing_dir").join("out.txt");

        let rows = vec![row(&["7", "North"])];
        assert!(write_rows(&rows, &path).is_err());
    }
}
