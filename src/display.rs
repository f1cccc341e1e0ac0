use crate::solver::constants::SKIP_MARKER;
use crate::utils::format_value;

/// Render the input numbers the way derivation seeds render them.
pub fn render_input(numbers: &[f64; 4]) -> String {
    let texts: Vec<String> = numbers.iter().map(|n| format_value(*n)).collect();
    format!("[{}]", texts.join(", "))
}

/// Pretty-print the solutions, lined up in the order of the original input
/// numbers.
///
/// Solutions are listed under the text form of the number they consumed
/// first, in input order, with the grouped-search block last; lines are
/// numbered consecutively across blocks and each step is right-aligned.
pub fn render_solutions(solutions: &[String], numbers: &[f64; 4]) -> String {
    let mut prefixes: Vec<String> = numbers.iter().map(|n| format_value(*n)).collect();
    prefixes.push(SKIP_MARKER.to_string());

    let mut out = String::new();
    let mut printed: Vec<&str> = Vec::new();
    let mut index = 0;

    for prefix in &prefixes {
        if printed.contains(&prefix.as_str()) {
            continue;
        }

        for solution in solutions {
            let steps: Vec<&str> = solution.split(", ").collect();
            if steps.first().copied() != Some(prefix.as_str()) {
                continue;
            }

            let mut line = String::new();
            for (i, step) in steps.iter().enumerate() {
                if i == 0 {
                    line.push_str(&format!("{:>4},", step));
                } else if i + 1 == steps.len() {
                    line.push_str(&format!("{:>18}", step));
                } else {
                    line.push_str(&format!("{:>18},", step));
                }
            }

            index += 1;
            out.push_str(&format!("Solution {:2}:  {}\n", index, line));
        }

        printed.push(prefix.as_str());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{render_input, render_solutions};

    #[test]
    fn test_render_input_uses_plain_number_text() {
        assert_eq!(render_input(&[2.0, 3.0, 4.0, 8.0]), "[2, 3, 4, 8]");
        assert_eq!(render_input(&[0.5, 3.0, 4.0, 8.0]), "[0.5, 3, 4, 8]");
    }

    #[test]
    fn test_solutions_grouped_by_leading_token() {
        let solutions = vec![
            "8, 8 * 4 = 32, 32 - 2 = 30, 30 - 3 = 27".to_string(),
            "3, 3 * 4 = 12, 12 + 4 = 16, 16 + 8 = 24".to_string(),
            "skip, 2 * 3 = 6, 8 - 4 = 4, 6 * 4 = 24".to_string(),
        ];
        let out = render_solutions(&solutions, &[2.0, 3.0, 4.0, 8.0]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        // input order: the "3" block prints before the "8" block, skip last
        assert!(lines[0].starts_with("Solution  1:"));
        assert!(lines[0].contains("   3,"));
        assert!(lines[1].contains("   8,"));
        assert!(lines[2].contains("skip,"));
    }

    #[test]
    fn test_duplicate_inputs_print_their_block_once() {
        let solutions = vec![
            "3, 3 + 3 = 6, 6 + 8 = 14, 14 + 8 = 22".to_string(),
        ];
        let out = render_solutions(&solutions, &[3.0, 3.0, 8.0, 8.0]);

        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_lines_are_numbered_consecutively() {
        let solutions = vec![
            "2, 2 + 3 = 5, 5 + 4 = 9, 9 + 8 = 17".to_string(),
            "skip, 2 * 3 = 6, 8 - 4 = 4, 6 * 4 = 24".to_string(),
        ];
        let out = render_solutions(&solutions, &[2.0, 3.0, 4.0, 8.0]);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("Solution  1:"));
        assert!(lines[1].starts_with("Solution  2:"));
    }
}
