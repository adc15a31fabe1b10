//! Batch driver: a case count line, then one N per line.

use crate::error::CliError;
use clap::ValueEnum;
use foregone_core::case::{Case, verify};
use serde::Serialize;
use std::io::{BufRead, Write};

///
/// OutputFormat
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// `Case #i: A B`
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

///
/// BatchOptions
///

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BatchOptions {
    pub format: OutputFormat,
    pub verify: bool,
}

#[derive(Serialize)]
struct CaseRecord<'a> {
    case: usize,
    a: &'a str,
    b: &'a str,
}

/// Solve every case in `reader`, writing one answer line per case.
///
/// Returns the number of cases solved. Stops at the first failing case;
/// answers already written stay written.
pub(crate) fn run<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &BatchOptions,
) -> Result<usize, CliError> {
    let mut lines = reader.lines();

    let header = lines.next().transpose()?.unwrap_or_default();
    let expected: usize = header
        .trim()
        .parse()
        .map_err(|_| CliError::CaseCount { line: header.clone() })?;
    tracing::info!(cases = expected, "solving batch");

    for index in 1..=expected {
        let Some(line) = lines.next().transpose()? else {
            return Err(CliError::MissingCase {
                expected,
                found: index - 1,
            });
        };

        let case = Case::parse(&line).map_err(|source| CliError::Case {
            case: index,
            source,
        })?;
        let pair = case.solve().map_err(|source| CliError::Case {
            case: index,
            source,
        })?;
        tracing::debug!(case = index, width = case.number().len(), "case solved");

        if options.verify {
            verify(case.number(), &pair).map_err(|source| CliError::Verify {
                case: index,
                source,
            })?;
        }

        match options.format {
            OutputFormat::Plain => writeln!(writer, "Case #{index}: {pair}")?,
            OutputFormat::Json => {
                let record = CaseRecord {
                    case: index,
                    a: &pair.high,
                    b: &pair.low,
                };
                let encoded = serde_json::to_string(&record).map_err(|source| CliError::Json {
                    case: index,
                    source,
                })?;
                writeln!(writer, "{encoded}")?;
            }
        }
    }

    if lines.next().is_some() {
        tracing::warn!(cases = expected, "ignoring input past the declared case count");
    }
    writer.flush()?;

    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foregone_core::DigitError;
    use std::io::Cursor;

    fn run_plain(input: &str) -> Result<String, CliError> {
        run_with(input, BatchOptions::default())
    }

    fn run_with(input: &str, options: BatchOptions) -> Result<String, CliError> {
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out, &options)?;

        Ok(String::from_utf8(out).expect("answers are ascii"))
    }

    #[test]
    fn single_case_is_prefixed() {
        assert_eq!(run_plain("1\n2").expect("valid batch"), "Case #1: 1 1\n");
        assert_eq!(run_plain("1\n4\n").expect("valid batch"), "Case #1: 2 2\n");
    }

    #[test]
    fn multiple_cases_are_numbered_in_order() {
        let input = "4\n\
                     87346598763245099823476345\n\
                     18763452348762349872435\n\
                     520987345763245002000\n\
                     909009000090000009\n";
        let expected = "Case #1: 50006598763250000000076350 37339999999995099823399995\n\
                        Case #2: 9381726175000009872500 9381726173762339999935\n\
                        Case #3: 260587350000005002001 260399995763239999999\n\
                        Case #4: 509009000090000010 399999999999999999\n";

        assert_eq!(run_plain(input).expect("valid batch"), expected);
    }

    #[test]
    fn whitespace_and_leading_zeros_are_tolerated() {
        let output = run_plain(" 2 \r\n  128  \r\n00909\r\n").expect("valid batch");

        assert_eq!(output, "Case #1: 65 63\nCase #2: 510 399\n");
    }

    #[test]
    fn zero_is_printed_as_a_digit() {
        assert_eq!(run_plain("2\n0\n1\n").expect("valid batch"), "Case #1: 0 0\nCase #2: 1 0\n");
    }

    #[test]
    fn json_format_emits_one_object_per_case() {
        let options = BatchOptions {
            format: OutputFormat::Json,
            verify: true,
        };
        let output = run_with("2\n3\n909\n", options).expect("valid batch");

        assert_eq!(
            output,
            "{\"case\":1,\"a\":\"2\",\"b\":\"1\"}\n{\"case\":2,\"a\":\"510\",\"b\":\"399\"}\n"
        );
    }

    #[test]
    fn verified_run_matches_plain_run() {
        let options = BatchOptions {
            format: OutputFormat::Plain,
            verify: true,
        };

        assert_eq!(
            run_with("1\n87346598\n", options).expect("valid batch"),
            "Case #1: 50006599 37339999\n"
        );
    }

    #[test]
    fn bad_case_count_is_rejected() {
        assert!(matches!(
            run_plain("three\n1\n2\n3\n"),
            Err(CliError::CaseCount { line }) if line == "three"
        ));
        assert!(matches!(run_plain(""), Err(CliError::CaseCount { .. })));
    }

    #[test]
    fn short_input_reports_missing_cases() {
        assert!(matches!(
            run_plain("3\n2\n3\n"),
            Err(CliError::MissingCase {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn malformed_case_reports_its_number() {
        let err = run_plain("2\n12\n1x\n").expect_err("second case is not decimal");

        assert!(matches!(
            err,
            CliError::Case {
                case: 2,
                source: DigitError::InvalidDigit {
                    position: 1,
                    found: 'x'
                }
            }
        ));
        assert_eq!(err.to_string(), "case #2: invalid decimal digit 'x' at position 1");
    }
}
