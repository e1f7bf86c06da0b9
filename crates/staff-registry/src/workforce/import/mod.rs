mod outcome;
mod parser;

use crate::workforce::registry::EmployeeRegistry;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub use outcome::{ImportDiagnostic, ImportOutcome, LineRejection};

/// Tolerant CSV intake: every line is judged on its own, and a bad line only
/// ever produces a diagnostic.
pub struct BatchImporter;

impl BatchImporter {
    pub fn from_path<P: AsRef<Path>>(registry: &mut EmployeeRegistry, path: P) -> ImportOutcome {
        let path = path.as_ref();
        match std::fs::File::open(path) {
            Ok(file) => Self::from_reader(registry, file),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "employee import source unavailable");
                ImportOutcome::read_failure(&err)
            }
        }
    }

    /// Reads the whole source before touching the registry, so a read failure
    /// never leaves a partially applied batch behind.
    pub fn from_reader<R: Read>(registry: &mut EmployeeRegistry, mut reader: R) -> ImportOutcome {
        let mut contents = String::new();
        if let Err(err) = reader.read_to_string(&mut contents) {
            warn!(error = %err, "failed to read employee import source");
            return ImportOutcome::read_failure(&err);
        }

        Self::import_str(registry, &contents)
    }

    pub fn import_str(registry: &mut EmployeeRegistry, contents: &str) -> ImportOutcome {
        Self::import_lines(registry, contents.lines())
    }

    /// Import raw lines. Line 1 is a header and is never parsed.
    pub fn import_lines<I, S>(registry: &mut EmployeeRegistry, lines: I) -> ImportOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let outcome = lines.into_iter().enumerate().skip(1).fold(
            ImportOutcome::default(),
            |mut outcome, (index, line)| {
                let line_number = index + 1;
                let line = line.as_ref();

                if line.trim().is_empty() {
                    outcome.skipped_blank += 1;
                    return outcome;
                }

                match admit_line(registry, line) {
                    Ok(()) => outcome.imported += 1,
                    Err(rejection) => {
                        debug!(line = line_number, reason = %rejection, "employee line rejected");
                        outcome
                            .diagnostics
                            .push(ImportDiagnostic::at_line(line_number, rejection));
                    }
                }

                outcome
            },
        );

        info!(
            imported = outcome.imported,
            rejected = outcome.rejected(),
            skipped_blank = outcome.skipped_blank,
            "employee import finished"
        );

        outcome
    }
}

fn admit_line(registry: &mut EmployeeRegistry, line: &str) -> Result<(), LineRejection> {
    let employee = parser::parse_line(line)?;
    if registry.add(employee) {
        Ok(())
    } else {
        Err(LineRejection::DuplicateEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    const HEADER: &str = "firstName,lastName,email,organization,position,compensation";

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream interrupted"))
        }
    }

    #[test]
    fn header_is_skipped_even_when_it_looks_like_data() {
        let mut registry = EmployeeRegistry::new();
        let outcome = BatchImporter::import_lines(
            &mut registry,
            [
                "Jan,Kowalski,jan@x.com,TechCorp,PROGRAMISTA,8500",
                "Anna,Nowak,anna@x.com,DataCorp,MANAGER,12000",
            ],
        );

        assert_eq!(outcome.imported, 1);
        assert!(outcome.is_clean());
        assert!(registry.contains("anna@x.com"));
        assert!(!registry.contains("jan@x.com"));
    }

    #[test]
    fn duplicate_email_reports_the_second_line() {
        let mut registry = EmployeeRegistry::new();
        let input = format!(
            "{HEADER}\nJan,Kowalski,a@x.com,TechCorp,PROGRAMISTA,8500\nAnna,Nowak,a@x.com,DataCorp,MANAGER,12000"
        );
        let outcome = BatchImporter::import_str(&mut registry, &input);

        assert_eq!(outcome.imported, 1);
        assert_eq!(outcome.diagnostics.len(), 1);
        let diagnostic = &outcome.diagnostics[0];
        assert_eq!(diagnostic.line, Some(3));
        assert_eq!(diagnostic.rejection, LineRejection::DuplicateEmail);
        assert_eq!(
            diagnostic.to_string(),
            "line 3: employee with this email already exists"
        );
        assert_eq!(registry.all()[0].organization(), "TechCorp");
    }

    #[test]
    fn blank_lines_are_neither_imported_nor_reported() {
        let mut registry = EmployeeRegistry::new();
        let input = format!(
            "{HEADER}\n\n   \nJan,Kowalski,jan@x.com,TechCorp,PROGRAMISTA,8500\n\t\n"
        );
        let outcome = BatchImporter::import_str(&mut registry, &input);

        assert_eq!(outcome.imported, 1);
        assert_eq!(outcome.skipped_blank, 3);
        assert!(outcome.is_clean());
    }

    #[test]
    fn line_numbers_count_blank_lines_and_header() {
        let mut registry = EmployeeRegistry::new();
        let input = format!(
            "{HEADER}\n\nJan,Kowalski,jan@x.com,TechCorp,PROGRAMISTA\nAnna,Nowak,anna@x.com,DataCorp,DYREKTOR,12000"
        );
        let outcome = BatchImporter::import_str(&mut registry, &input);

        let lines: Vec<Option<usize>> = outcome.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![Some(3), Some(4)]);
        assert_eq!(outcome.diagnostics[0].category(), "column_count");
        assert_eq!(outcome.diagnostics[1].category(), "unknown_position");
    }

    #[test]
    fn every_failure_kind_is_collected_without_aborting() {
        let mut registry = EmployeeRegistry::new();
        let input = [
            HEADER,
            "Jan,Kowalski,jan@x.com,TechCorp,PROGRAMISTA,8500",
            "only,three,fields",
            "Ewa,,ewa@x.com,TechCorp,MANAGER,12000",
            "Ola,Lis,ola@x.com,TechCorp,CEO,12000",
            "Ala,Kot,ala@x.com,TechCorp,MANAGER,dwanascie",
            "Iza,Mak,iza@x.com,TechCorp,MANAGER,-5",
            "Jan,Kowalski,jan@x.com,TechCorp,PROGRAMISTA,8500",
            "Ida,Bak,ida@x.com,DataCorp,stazysta,3500",
        ];
        let outcome = BatchImporter::import_lines(&mut registry, input);

        assert_eq!(outcome.imported, 2);
        let categories: Vec<&str> = outcome
            .diagnostics
            .iter()
            .map(ImportDiagnostic::category)
            .collect();
        assert_eq!(
            categories,
            vec![
                "column_count",
                "blank_field",
                "unknown_position",
                "invalid_compensation",
                "non_positive_compensation",
                "duplicate_email",
            ]
        );
        assert_eq!(outcome.imported + outcome.rejected(), input.len() - 1);
        assert_eq!(registry.len(), outcome.imported);
    }

    #[test]
    fn read_failure_yields_single_diagnostic_and_no_imports() {
        let mut registry = EmployeeRegistry::new();
        let outcome = BatchImporter::from_reader(&mut registry, FailingReader);

        assert_eq!(outcome.imported, 0);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].line, None);
        assert_eq!(outcome.diagnostics[0].category(), "read_failure");
        assert!(outcome.diagnostics[0].message().contains("stream interrupted"));
        assert!(registry.is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_read_failure() {
        let mut registry = EmployeeRegistry::new();
        let mut bytes = format!("{HEADER}\nJan,Kowalski,jan@x.com,TechCorp,PROGRAMISTA,8500\n")
            .into_bytes();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);

        let outcome = BatchImporter::from_reader(&mut registry, Cursor::new(bytes));
        assert_eq!(outcome.imported, 0);
        assert_eq!(outcome.diagnostics[0].category(), "read_failure");
        assert!(registry.is_empty());
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let mut registry = EmployeeRegistry::new();
        let outcome = BatchImporter::from_path(&mut registry, "./does-not-exist.csv");

        assert_eq!(outcome.imported, 0);
        assert_eq!(outcome.rejected(), 1);
        assert_eq!(outcome.diagnostics[0].line, None);
    }

    #[test]
    fn empty_input_and_header_only_import_nothing() {
        let mut registry = EmployeeRegistry::new();
        assert_eq!(
            BatchImporter::import_str(&mut registry, ""),
            ImportOutcome::default()
        );
        assert_eq!(
            BatchImporter::import_str(&mut registry, HEADER),
            ImportOutcome::default()
        );
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let mut registry = EmployeeRegistry::new();
        let input = format!("{HEADER}\r\nJan,Kowalski,jan@x.com,TechCorp,PROGRAMISTA,8500\r\n");
        let outcome = BatchImporter::import_str(&mut registry, &input);
        assert_eq!(outcome.imported, 1);
        assert_eq!(registry.all()[0].compensation(), 8_500.0);
    }

    #[test]
    fn outcome_serializes_with_categories() {
        let mut registry = EmployeeRegistry::new();
        let input = format!("{HEADER}\nJan,Kowalski,jan@x.com,TechCorp,PROGRAMISTA");
        let outcome = BatchImporter::import_str(&mut registry, &input);

        let json = serde_json::to_value(&outcome).expect("serialize outcome");
        assert_eq!(json["imported"], 0);
        assert_eq!(json["diagnostics"][0]["line"], 2);
        assert_eq!(json["diagnostics"][0]["category"], "column_count");
        assert_eq!(
            json["diagnostics"][0]["message"],
            "wrong column count, expected 6, got 5"
        );
    }
}
