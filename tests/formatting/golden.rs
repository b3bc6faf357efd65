#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use consent::formatting::*;
    use consent::parsing;

    /// Golden test for the format command
    ///
    /// Every .consent file in tests/golden/ is expected to already be in
    /// canonical form, so parsing it and formatting the result must give
    /// back the original text. If a file fails this test either the parser
    /// or formatter is wrong, or the file needs reformatting after a
    /// deliberate style change.

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("consent")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .consent files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let original = fs::read_to_string(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let document = parsing::parse(&original)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", file, e));

            // Format the document using the Identity renderer (no markup)
            let result = render(&Identity, &document);

            if result != original {
                show_diff(&original, &result, file);
                failures.push(file.clone());
            }

            // and what comes back must mean the same thing
            let reparsed = parsing::parse(&result)
                .unwrap_or_else(|e| panic!("Failed to reparse {:?}: {}", file, e));
            assert_eq!(reparsed, document, "{:?}", file);
        }

        if !failures.is_empty() {
            panic!("All golden files must format unchanged");
        }
    }

    #[test]
    fn samples_reformat_stably() {
        let dir = Path::new("tests/samples");

        for entry in fs::read_dir(dir).expect("Failed to read samples directory") {
            let path = entry
                .expect("Failed to read directory entry")
                .path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                != Some("consent")
            {
                continue;
            }

            let document = parsing::parse_file(&path)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", path, e));

            let once = render(&Identity, &document);
            let reparsed = parsing::parse(&once).unwrap();
            assert_eq!(reparsed, document, "{:?}", path);

            let twice = render(&Identity, &reparsed);
            assert_eq!(once, twice, "{:?}", path);
        }
    }
}
