//! Plain-text tables of point lists

use crate::types::Point2;

/// Render a numbered table of `points` under a `List of <kind> Points` banner.
///
/// Each point takes two rows (`X` then `Y`) followed by a separator.
pub fn format_point_table(points: &[Point2], kind: &str) -> String {
    let rule = "=".repeat(22 + kind.len());
    let separator = "-".repeat(15);

    let mut out = format!("{rule}\n    List of {kind} Points    \n{rule}\n");
    for (i, point) in points.iter().enumerate() {
        out.push_str(&format!("{:>5} | X : {:>2}\n", i + 1, point.x));
        out.push_str(&format!("{:<5} | Y : {:>2}\n", " ", point.y));
        out.push_str(&separator);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        let table = format_point_table(&[Point2::new(3.0, 42.0), Point2::new(10.5, 7.0)], "Hull");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "=".repeat(26));
        assert_eq!(lines[1], "    List of Hull Points    ");
        assert_eq!(lines[2], "=".repeat(26));
        assert_eq!(lines[3], "    1 | X :  3");
        assert_eq!(lines[4], "      | Y : 42");
        assert_eq!(lines[5], "---------------");
        assert_eq!(lines[6], "    2 | X : 10.5");
        assert_eq!(lines[7], "      | Y :  7");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_empty_table_has_banner_only() {
        let table = format_point_table(&[], "Input");
        assert_eq!(table.lines().count(), 3);
    }
}
