//! Console Event Sink
//!
//! Human-readable progress lines for interactive use.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Event sink that prints colored progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stdout
    pub fn stdout(color: bool, unicode: bool, verbose: u8) -> Self {
        Self::with_writer(io::stdout(), color, unicode, verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        verbose: u8,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
            verbose,
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn render(&self, event: &DeployEvent) -> Option<String> {
        let line = match event {
            DeployEvent::Started {
                source,
                destination,
                distribution_id,
                dry_run,
            } => {
                let mut text = format!(
                    "{} {}\n  CloudFront distribution: {}",
                    self.icon(Icon::Deploy),
                    ColoredText::info(format!(
                        "Deploying {} to {}",
                        source.display(),
                        destination
                    ))
                    .render(self.color),
                    distribution_id
                );
                if *dry_run {
                    text.push_str(&format!(
                        "\n{}",
                        ColoredText::warning("DRY RUN MODE - No changes will be made")
                            .render(self.color)
                    ));
                }
                text
            }

            DeployEvent::FilesDiscovered { count } if self.verbose > 0 => {
                ColoredText::dim(format!("  {} files found", count)).render(self.color)
            }

            DeployEvent::FileUploaded { key, dry_run, .. } => {
                let suffix = if *dry_run { " (would upload)" } else { "" };
                format!("  {} {}{}", self.icon(Icon::Upload), key, suffix)
            }

            DeployEvent::FileSkipped { key, .. } if self.verbose > 0 => format!(
                "  {} {}",
                self.icon(Icon::Skipped),
                ColoredText::dim(format!("{} (unchanged)", key)).render(self.color)
            ),

            DeployEvent::FileError { key, error, .. } => format!(
                "  {} {}",
                self.icon(Icon::Error),
                ColoredText::error(format!("Error uploading {}: {}", key, error))
                    .render(self.color)
            ),

            DeployEvent::SyncCompleted {
                uploaded, skipped, ..
            } => format!(
                "\n{}\n  Uploaded: {} files\n  Skipped: {} files",
                ColoredText::info("Summary:").bold().render(self.color),
                uploaded,
                skipped
            ),

            DeployEvent::InvalidationSplit {
                path_count,
                batch_count,
            } => format!(
                "{} {}",
                self.icon(Icon::Warning),
                ColoredText::warning(format!(
                    "{} paths exceed the per-request limit, creating {} invalidations",
                    path_count, batch_count
                ))
                .render(self.color)
            ),

            DeployEvent::InvalidationCreated { id, path_count } => format!(
                "{} Invalidation created: {} ({} paths)",
                self.icon(Icon::Cdn),
                id,
                path_count
            ),

            DeployEvent::InvalidationPlanned { paths } => format!(
                "\n{}",
                ColoredText::warning(format!(
                    "DRY RUN: Would create invalidation for {} files",
                    paths.len()
                ))
                .render(self.color)
            ),

            DeployEvent::InvalidationNotNeeded => format!(
                "\n{} {}",
                self.icon(Icon::Success),
                ColoredText::success("No files uploaded - no invalidation needed")
                    .render(self.color)
            ),

            DeployEvent::WaitStarted { id } => format!(
                "{} Waiting for invalidation {} to complete...",
                self.icon(Icon::Progress),
                id
            ),

            DeployEvent::WaitPolled { id, status } if self.verbose > 0 => {
                ColoredText::dim(format!("  {}: {}", id, status)).render(self.color)
            }

            DeployEvent::WaitFinished { id, outcome } if outcome.is_completed() => format!(
                "{} {}",
                self.icon(Icon::Success),
                ColoredText::success(format!("Invalidation {} completed", id)).render(self.color)
            ),

            DeployEvent::WaitFinished { id, outcome } => format!(
                "{} {}",
                self.icon(Icon::Warning),
                ColoredText::warning(format!(
                    "Invalidation {} {}; it may still be in progress",
                    id, outcome
                ))
                .render(self.color)
            ),

            DeployEvent::Completed { dry_run, .. } => {
                let text = if *dry_run {
                    "Dry run complete"
                } else {
                    "Deploy complete"
                };
                format!(
                    "\n{} {}",
                    self.icon(Icon::Success),
                    ColoredText::success(text).bold().render(self.color)
                )
            }

            _ => return None,
        };
        Some(line)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Some(line) = self.render(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{InvalidationId, InvalidationStatus, ObjectKey, WaitOutcome};
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sink(verbose: u8) -> (ConsoleEventSink, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (
            ConsoleEventSink::with_writer(buffer.clone(), false, false, verbose),
            buffer,
        )
    }

    fn output(buffer: &SharedBuffer) -> String {
        String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn start_mentions_dry_run_mode() {
        let (sink, buffer) = sink(0);
        sink.on_event(DeployEvent::Started {
            source: PathBuf::from("public"),
            destination: "s3://my-site".to_string(),
            distribution_id: "E2ABC".to_string(),
            dry_run: true,
        });

        let out = output(&buffer);
        assert!(out.contains("Deploying public to s3://my-site"));
        assert!(out.contains("CloudFront distribution: E2ABC"));
        assert!(out.contains("DRY RUN MODE"));
    }

    #[test]
    fn skipped_files_only_shown_when_verbose() {
        let (quiet, quiet_buf) = sink(0);
        let (verbose, verbose_buf) = sink(1);
        let event = DeployEvent::FileSkipped {
            index: 0,
            key: ObjectKey::new("index.html"),
            dry_run: false,
        };

        quiet.on_event(event.clone());
        verbose.on_event(event);

        assert!(output(&quiet_buf).is_empty());
        assert_eq!(output(&verbose_buf), "  [ ] index.html (unchanged)\n");
    }

    #[test]
    fn summary_counts_files() {
        let (sink, buffer) = sink(0);
        sink.on_event(DeployEvent::SyncCompleted {
            uploaded: 3,
            skipped: 7,
            dry_run: false,
        });

        let out = output(&buffer);
        assert!(out.contains("Uploaded: 3 files"));
        assert!(out.contains("Skipped: 7 files"));
    }

    #[test]
    fn unfinished_wait_is_a_warning() {
        let (sink, buffer) = sink(0);
        sink.on_event(DeployEvent::WaitFinished {
            id: InvalidationId::new("I1"),
            outcome: WaitOutcome::Failed(InvalidationStatus::from_api("Throttled")),
        });

        let out = output(&buffer);
        assert!(out.starts_with("[WARN]"));
        assert!(out.contains("failed with status: Throttled"));
        assert!(out.contains("may still be in progress"));
    }

    #[test]
    fn dry_run_plan_counts_paths() {
        let (sink, buffer) = sink(0);
        sink.on_event(DeployEvent::InvalidationPlanned {
            paths: vec!["/a.html".to_string(), "/b.html".to_string()],
        });

        assert!(output(&buffer).contains("Would create invalidation for 2 files"));
    }
}
