use crate::config::locale::Messages;
use crate::config::OutputFormat;
use crate::core::input::NumberReader;
use crate::domain::model::IntersectionReport;
use crate::domain::ports::SettingsProvider;
use crate::domain::segment::Segment;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// One interactive run: read two segments, then report their intersection.
pub struct Session<R, W, E> {
    reader: NumberReader<R>,
    out: W,
    err: E,
    messages: &'static Messages,
    output: OutputFormat,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new<S: SettingsProvider>(settings: &S, input: R, out: W, err: E) -> Self {
        let messages = settings.locale().messages();
        let output = settings.output_format();
        let reader = NumberReader::new(input, messages.invalid_number)
            .with_max_attempts(settings.max_attempts())
            .with_prompts(output == OutputFormat::Text);

        Self {
            reader,
            out,
            err,
            messages,
            output,
        }
    }

    pub fn run(&mut self) -> Result<IntersectionReport> {
        let m = self.messages;
        let first = self.read_segment(m.prompt_first_start, m.prompt_first_end)?;
        let second = self.read_segment(m.prompt_second_start, m.prompt_second_end)?;

        let report = IntersectionReport::new(first, second);
        tracing::info!(
            "Intersection of {} and {}: {:?}",
            first,
            second,
            report.intersection
        );

        match self.output {
            OutputFormat::Text => self.write_text(&report)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;

        Ok(report)
    }

    fn read_segment(&mut self, start_prompt: &str, end_prompt: &str) -> Result<Segment> {
        let start = self
            .reader
            .read_number(start_prompt, &mut self.out, &mut self.err)?;
        let end = self
            .reader
            .read_number(end_prompt, &mut self.out, &mut self.err)?;
        Segment::try_new(start, end)
    }

    fn write_text(&mut self, report: &IntersectionReport) -> Result<()> {
        let m = self.messages;
        writeln!(
            self.out,
            "{} {}",
            m.first_label,
            report.first.display_as(m.segment_noun)
        )?;
        writeln!(
            self.out,
            "{} {}",
            m.second_label,
            report.second.display_as(m.segment_noun)
        )?;

        match &report.intersection {
            Some(overlap) => writeln!(
                self.out,
                "{}: {}",
                m.intersection_label,
                overlap.display_as(m.segment_noun)
            )?,
            None => writeln!(self.out, "{}", m.no_intersection)?,
        }
        Ok(())
    }

    /// Hands back the output streams, mostly for inspecting them in tests.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::locale::Locale;
    use crate::config::Settings;
    use crate::utils::error::SegmentError;
    use std::io::Cursor;

    fn run(settings: Settings, input: &str) -> (Result<IntersectionReport>, String, String) {
        let mut session = Session::new(
            &settings,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Vec::new(),
        );
        let result = session.run();
        let (out, err) = session.into_writers();
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_overlapping_segments() {
        let (result, out, err) = run(Settings::default(), "0 10 5 15\n");
        let report = result.unwrap();
        assert_eq!(report.intersection, Some(Segment::new(5.0, 10.0)));
        assert!(out.contains("First Segment: [0, 10]\n"));
        assert!(out.contains("Second Segment: [5, 15]\n"));
        assert!(out.ends_with("Intersection: Segment: [5, 10]\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_reversed_input_is_normalized() {
        let (result, out, _) = run(Settings::default(), "10\n0\n15\n5\n");
        assert_eq!(result.unwrap().first, Segment::new(0.0, 10.0));
        assert!(out.contains("First Segment: [0, 10]"));
    }

    #[test]
    fn test_touching_segments_do_not_intersect() {
        let (result, out, _) = run(Settings::default(), "0 5 5 10");
        assert_eq!(result.unwrap().intersection, None);
        assert!(out.ends_with("Segments do not intersect.\n"));
    }

    #[test]
    fn test_malformed_token_reprompts() {
        let (result, out, err) = run(Settings::default(), "0 ten 10 5 15\n");
        assert_eq!(
            result.unwrap().intersection,
            Some(Segment::new(5.0, 10.0))
        );
        assert_eq!(out.matches("Enter the end of the first segment: ").count(), 2);
        assert_eq!(
            err,
            "Error: invalid value entered. Please enter a number.\n"
        );
    }

    #[test]
    fn test_russian_output() {
        let settings = Settings {
            locale: Locale::Ru,
            ..Settings::default()
        };
        let (_, out, _) = run(settings, "0 1 5 6\n");
        assert!(out.contains("Первый Отрезок: [0, 1]"));
        assert!(out.contains("Второй Отрезок: [5, 6]"));
        assert!(out.ends_with("Отрезки не пересекаются.\n"));
    }

    #[test]
    fn test_json_output_has_no_prompts() {
        let settings = Settings {
            output: OutputFormat::Json,
            ..Settings::default()
        };
        let (_, out, _) = run(settings, "0 10 3 7\n");
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["intersection"]["start"], 3.0);
        assert_eq!(value["intersection"]["end"], 7.0);
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_short_input_fails() {
        let (result, _, _) = run(Settings::default(), "0 10 5");
        assert!(matches!(result, Err(SegmentError::InputClosed { .. })));
    }
}
