/*!
 * Circle record loading.
 *
 * Input is a text file with one `x,y,radius` record per line.
 * Anything after a `#` is a comment, and lines left blank after
 * stripping comments are skipped. Records are chunked into groups
 * of `circles_per_group` in file order.
 */

mod proc_errors;

use crate::geo_2d::{Circle, CircleGroup};

pub use proc_errors::{
    LoadError,
    ProcResult,
    err_str,
};

/// Number of fields in one circle record.
const RECORD_FIELDS: usize = 3;

/// Load circle groups from a record file.
pub fn load_circle_groups(path: &str, circles_per_group: usize) -> ProcResult<Vec<CircleGroup>> {
    let contents = crate::io::read_to_string(path)?;
    let groups = parse_circle_groups(&contents, circles_per_group)?;
    tracing::info!(path, groups = groups.len(), circles_per_group, "loaded circle groups");
    Ok(groups)
}

/// Parse circle groups from the contents of a record file.
pub fn parse_circle_groups(contents: &str, circles_per_group: usize) -> ProcResult<Vec<CircleGroup>> {
    if circles_per_group == 0 {
        return err_str("Circles per group must be at least 1");
    }

    let circles = parse_circles(contents)?;

    if circles.len() % circles_per_group != 0 {
        return Err(LoadError::GroupSizeMismatch{records: circles.len(), circles_per_group});
    }

    Ok(circles
        .chunks(circles_per_group)
        .map(|chunk| CircleGroup::new(chunk.to_vec()))
        .collect())
}

/// Parse every record into a flat list of circles, in file order.
pub fn parse_circles(contents: &str) -> ProcResult<Vec<Circle>> {
    let mut circles = Vec::new();
    for (line_idx, line) in contents.lines().enumerate() {
        let record = strip_comment(line);
        if record.is_empty() {
            continue;
        }
        circles.push(parse_record(record, line_idx + 1)?);
    }
    Ok(circles)
}

/// Drop a trailing `#` comment and surrounding whitespace.
fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((record, _comment)) => record.trim(),
        None => line.trim(),
    }
}

/// Parse a single `x,y,radius` record.
fn parse_record(record: &str, line: usize) -> ProcResult<Circle> {
    let malformed = |reason: String| LoadError::MalformedRecord{
        line,
        record: record.to_string(),
        reason,
    };

    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != RECORD_FIELDS {
        return Err(malformed(format!("Expected {} fields (x, y, radius), found {}", RECORD_FIELDS, fields.len())));
    }

    let mut values = [0.0; RECORD_FIELDS];
    for (value, (field, name)) in values.iter_mut().zip(fields.iter().zip(["x", "y", "radius"])) {
        *value = match field.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => parsed,
            Ok(_) => return Err(malformed(format!("Field {} is not a finite number: \"{}\"", name, field))),
            Err(_) => return Err(malformed(format!("Field {} is not a number: \"{}\"", name, field))),
        };
    }

    Ok(Circle::new(values[0], values[1], values[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_group_in_file_order() {
        let contents = "0,0,1\n1,0,1\n0,1,1\n1,1,1\n";
        let groups = parse_circle_groups(contents, 4).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].circles(), &[
            Circle::new(0.0, 0.0, 1.0),
            Circle::new(1.0, 0.0, 1.0),
            Circle::new(0.0, 1.0, 1.0),
            Circle::new(1.0, 1.0, 1.0),
        ]);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let contents = "\
# header comment
0, 0, 1   # first
  1.5,-2,0.25

   # indented comment
3e1,4,5
";
        let circles = parse_circles(contents).unwrap();
        assert_eq!(circles, vec![
            Circle::new(0.0, 0.0, 1.0),
            Circle::new(1.5, -2.0, 0.25),
            Circle::new(30.0, 4.0, 5.0),
        ]);
    }

    #[test]
    fn chunks_into_multiple_groups() {
        let contents = "0,0,1\n1,1,1\n2,2,2\n3,3,3\n";
        let groups = parse_circle_groups(contents, 2).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1][0], Circle::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(parse_circle_groups("# nothing here\n\n", 4).unwrap().is_empty());
    }

    #[test]
    fn two_fields_is_malformed() {
        let contents = "0,0,1\n# comment\n1,0\n";
        match parse_circle_groups(contents, 1) {
            Err(LoadError::MalformedRecord{line, record, ..}) => {
                assert_eq!(line, 3);
                assert_eq!(record, "1,0");
            },
            other => panic!("Expected a malformed record error, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_and_non_finite_fields_are_malformed() {
        for record in ["a,0,1", "0,0,", "0,NaN,1", "inf,0,1", "0,0,1,2"] {
            let result = parse_circles(record);
            assert!(matches!(result, Err(LoadError::MalformedRecord{line: 1, ..})), "{record}");
        }
    }

    #[test]
    fn leftover_records_fail_the_load() {
        let contents = "0,0,1\n1,0,1\n0,1,1\n";
        match parse_circle_groups(contents, 4) {
            Err(LoadError::GroupSizeMismatch{records, circles_per_group}) => {
                assert_eq!(records, 3);
                assert_eq!(circles_per_group, 4);
            },
            other => panic!("Expected a group size mismatch, got {:?}", other),
        }
    }

    #[test]
    fn zero_group_size_is_rejected() {
        assert!(matches!(parse_circle_groups("0,0,1", 0), Err(LoadError::StringOnly(_))));
    }
}
