//! Console presentation of pipeline events.

use std::io::{self, Write};

use chrono::Local;
use pipesim_ci::{AdviceTone, EventSink, PipelineEvent, PipelineResult, StageStatus};

const RULE_WIDTH: usize = 60;
const RECOMMENDATION_RULE_WIDTH: usize = 50;

/// ANSI escape codes used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    header: &'static str,
    blue: &'static str,
    cyan: &'static str,
    green: &'static str,
    warning: &'static str,
    fail: &'static str,
    bold: &'static str,
    end: &'static str,
}

impl Palette {
    pub fn ansi() -> Self {
        Self {
            header: "\x1b[95m",
            blue: "\x1b[94m",
            cyan: "\x1b[96m",
            green: "\x1b[92m",
            warning: "\x1b[93m",
            fail: "\x1b[91m",
            bold: "\x1b[1m",
            end: "\x1b[0m",
        }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self {
            header: "",
            blue: "",
            cyan: "",
            green: "",
            warning: "",
            fail: "",
            bold: "",
            end: "",
        }
    }

    fn stage(&self, status: StageStatus) -> &'static str {
        match status {
            StageStatus::Success => self.green,
            StageStatus::Running => self.warning,
            StageStatus::Failed => self.fail,
        }
    }

    fn advice(&self, tone: AdviceTone) -> &'static str {
        match tone {
            AdviceTone::Positive => self.green,
            AdviceTone::Caution => self.warning,
            AdviceTone::Info => self.cyan,
        }
    }
}

/// Writes the pipeline's human-oriented output.
///
/// `EventSink::emit` cannot fail, so the first write error is kept and
/// surfaced by [`ConsoleRenderer::finish`].
pub struct ConsoleRenderer<W: Write> {
    out: W,
    palette: Palette,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self {
            out,
            palette,
            error: None,
        }
    }

    /// Print the closing summary for a finished run.
    pub fn render_summary(&mut self, result: &PipelineResult) {
        let outcome = self.write_summary(result);
        self.record(outcome);
    }

    /// Flush output and return the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn record(&mut self, outcome: io::Result<()>) {
        if let Err(err) = outcome {
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }

    fn line(&mut self, color: &str, text: &str) -> io::Result<()> {
        writeln!(self.out, "{color}{text}{}", self.palette.end)
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        let p = self.palette;
        let width = RULE_WIDTH;
        let rule = "=".repeat(width);
        writeln!(self.out)?;
        writeln!(self.out, "{}{}{rule}{}", p.header, p.bold, p.end)?;
        writeln!(self.out, "{}{}{title:^width$}{}", p.header, p.bold, p.end)?;
        writeln!(self.out, "{}{}{rule}{}", p.header, p.bold, p.end)?;
        writeln!(self.out)
    }

    fn write_event(&mut self, event: &PipelineEvent) -> io::Result<()> {
        let p = self.palette;
        match event {
            PipelineEvent::RunStarted {
                started_at,
                target_application,
                framework,
                ..
            } => {
                self.header("🤖 AI-POWERED CI/CD PIPELINE EXECUTION")?;
                let date = started_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
                self.line(p.blue, &format!("📅 Execution Date: {date}"))?;
                self.line(p.blue, &format!("🎯 Target Application: {target_application}"))?;
                self.line(p.blue, &format!("🔧 Framework: {framework}"))
            }
            PipelineEvent::StageChanged { stage, status } => {
                self.line(p.stage(*status), &format!("🚀 {stage} - {status}"))
            }
            PipelineEvent::Progress { message } => self.line(p.cyan, message),
            PipelineEvent::StrategyReady { strategy } => {
                self.line(p.green, "✅ AI Analysis Complete:")?;
                writeln!(self.out, "   Strategy: {}", strategy.strategy)?;
                writeln!(self.out, "   Priority Areas: {}", strategy.priority.join(", "))?;
                writeln!(self.out, "   Confidence Score: {}", strategy.confidence_score)?;
                writeln!(self.out, "   Estimated Duration: {}", strategy.estimated_duration)
            }
            PipelineEvent::EnvironmentChecked { check } => self.line(p.green, check),
            PipelineEvent::TestStarted { test_id, .. } => {
                self.line(p.cyan, &format!("🧪 Executing {test_id}..."))
            }
            PipelineEvent::TestFinished { outcome, .. } => {
                let (color, mark) = if outcome.passed() {
                    (p.green, "✅")
                } else {
                    (p.fail, "❌")
                };
                writeln!(
                    self.out,
                    "   {color}{mark} {} - {}{}",
                    outcome.test_id, outcome.status, p.end
                )
            }
            PipelineEvent::ReportAggregated {
                report,
                confidence_score,
                ..
            } => {
                self.line(p.green, "📊 AI Comprehensive Analysis Complete:")?;
                writeln!(self.out, "   Total Tests: {}", report.total)?;
                writeln!(self.out, "   Passed: {}", report.passed)?;
                writeln!(self.out, "   Failed: {}", report.failed)?;
                writeln!(self.out, "   Pass Rate: {}", report.pass_rate_display())?;
                writeln!(self.out, "   Risk Level: {}", report.risk_level)?;
                writeln!(self.out, "   AI Confidence: {confidence_score}")
            }
            PipelineEvent::RecommendationsReady { verdict } => {
                writeln!(self.out)?;
                self.line(p.warning, "🎯 AI-Generated Recommendations:")?;
                writeln!(self.out, "{}", "=".repeat(RECOMMENDATION_RULE_WIDTH))?;
                for advice in &verdict.recommendations {
                    self.line(p.advice(advice.tone), &advice.message)?;
                }
                Ok(())
            }
            PipelineEvent::DashboardReady { features, file } => {
                writeln!(self.out)?;
                self.line(p.header, "📊 AI Pipeline Dashboard Generated!")?;
                self.line(p.cyan, "🌐 Dashboard includes:")?;
                for feature in features {
                    writeln!(self.out, "   • {feature}")?;
                }
                writeln!(self.out)?;
                self.line(p.green, &format!("📁 Dashboard file: {file}"))
            }
        }
    }

    fn write_summary(&mut self, result: &PipelineResult) -> io::Result<()> {
        let p = self.palette;
        let report = &result.report;
        self.header("🎉 PIPELINE EXECUTION COMPLETE")?;
        self.line(
            p.green,
            &format!(
                "⏱️  Total Execution Time: {:.1} seconds",
                result.elapsed.as_secs_f64()
            ),
        )?;
        self.line(p.green, &format!("🎯 Overall Status: {}", result.verdict.overall))?;
        self.line(
            p.green,
            &format!("🤖 AI Confidence: {}", result.strategy.confidence_score),
        )?;
        self.line(
            p.green,
            &format!(
                "📊 Test Results: {}/{} passed ({})",
                report.passed,
                report.total,
                report.pass_rate_display()
            ),
        )
    }
}

impl<W: Write> EventSink for ConsoleRenderer<W> {
    fn emit(&mut self, event: &PipelineEvent) {
        let outcome = self.write_event(event);
        self.record(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipesim_ci::{Pacer, PipelineGate, PipelineSpec, PipelineStage, SimulatedPipeline};
    use pipesim_core::{
        seeded_rng, AggregateReport, Insights, OutcomePolicy, SimulatorConfig, TestOutcome,
        TestStatus,
    };

    fn render(events: &[PipelineEvent], palette: Palette) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new(), palette);
        for event in events {
            renderer.emit(event);
        }
        String::from_utf8(renderer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_stage_line_plain() {
        let text = render(
            &[PipelineEvent::StageChanged {
                stage: PipelineStage::EnvironmentSetup,
                status: StageStatus::Running,
            }],
            Palette::plain(),
        );
        assert_eq!(text, "🚀 Smart Environment Setup - RUNNING\n");
    }

    #[test]
    fn test_stage_line_colored_by_status() {
        let text = render(
            &[PipelineEvent::StageChanged {
                stage: PipelineStage::Aggregation,
                status: StageStatus::Success,
            }],
            Palette::ansi(),
        );
        assert!(text.starts_with("\x1b[92m🚀 AI Results Aggregation & Analysis - SUCCESS"));
        assert!(text.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_failed_test_line() {
        let text = render(
            &[PipelineEvent::TestFinished {
                group: "Banking Operations".to_string(),
                outcome: TestOutcome::new("TC007", TestStatus::Failed, 42.0),
            }],
            Palette::plain(),
        );
        assert_eq!(text, "   ❌ TC007 - FAILED\n");
    }

    #[test]
    fn test_report_block() {
        let outcomes = vec![
            TestOutcome::new("TC001", TestStatus::Passed, 40.0),
            TestOutcome::new("TC007", TestStatus::Failed, 40.0),
        ];
        let report = AggregateReport::from_outcomes(&outcomes);
        let text = render(
            &[
                PipelineEvent::ReportAggregated {
                    report: report.clone(),
                    insights: Insights::scripted(),
                    confidence_score: 0.95,
                },
                PipelineEvent::RecommendationsReady {
                    verdict: PipelineGate::evaluate(&report),
                },
            ],
            Palette::plain(),
        );
        assert!(text.contains("   Total Tests: 2\n"));
        assert!(text.contains("   Pass Rate: 50.0%\n"));
        assert!(text.contains("   Risk Level: medium\n"));
        assert!(text.contains("   AI Confidence: 0.95\n"));
        assert!(text.contains("⚠️  1 test(s) require attention"));
        assert!(text.contains(&"=".repeat(50)));
    }

    #[test]
    fn test_header_is_centered() {
        let mut renderer = ConsoleRenderer::new(Vec::new(), Palette::plain());
        renderer.header("TITLE").unwrap();
        let text = String::from_utf8(renderer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "=".repeat(60));
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[2].trim(), "TITLE");
    }

    async fn render_run(config: &SimulatorConfig, seed: u64) -> (PipelineResult, String) {
        let spec = PipelineSpec::new(&config.groups, Some(seed));
        let mut rng = seeded_rng(Some(seed));
        let mut pacer = Pacer::disabled();
        let mut renderer = ConsoleRenderer::new(Vec::new(), Palette::plain());
        let result = SimulatedPipeline::run(config, &spec, &mut rng, &mut pacer, &mut renderer).await;
        renderer.render_summary(&result);
        let text = String::from_utf8(renderer.finish().unwrap()).unwrap();
        (result, text)
    }

    fn position(text: &str, needle: &str) -> usize {
        text.find(needle)
            .unwrap_or_else(|| panic!("missing line {needle:?} in:\n{text}"))
    }

    #[tokio::test]
    async fn test_full_run_output() {
        let (result, text) = render_run(&SimulatorConfig::default(), 11).await;
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(60));
        assert_eq!(lines[2].trim(), "🤖 AI-POWERED CI/CD PIPELINE EXECUTION");
        assert_eq!(lines[3], "=".repeat(60));
        assert!(lines[5].starts_with("📅 Execution Date: "));
        assert_eq!(lines[6], "🎯 Target Application: ParaBank");
        assert_eq!(lines[7], "🔧 Framework: Playwright MCP");

        let stages = [
            "🚀 AI Test Strategy Analysis - RUNNING",
            "🚀 AI Test Strategy Analysis - SUCCESS",
            "🚀 Smart Environment Setup - RUNNING",
            "🚀 Smart Environment Setup - SUCCESS",
            "🚀 Execute Authentication Tests - RUNNING",
            "🚀 Execute Authentication Tests - SUCCESS",
            "🚀 Execute Banking Operations Tests - RUNNING",
            "   ❌ TC007 - FAILED",
            "🚀 Execute Banking Operations Tests - SUCCESS",
            "🚀 Execute Navigation & UI Tests - RUNNING",
            "🚀 Execute Navigation & UI Tests - SUCCESS",
            "🚀 AI Results Aggregation & Analysis - RUNNING",
            "🚀 AI Results Aggregation & Analysis - SUCCESS",
            "🎯 AI-Generated Recommendations:",
            "📊 AI Pipeline Dashboard Generated!",
            "🌐 Dashboard includes:",
            "   • Real-time test execution metrics",
            "📁 Dashboard file: Complete_Test_Execution_Report.html",
            "🎉 PIPELINE EXECUTION COMPLETE",
        ];
        let positions: Vec<usize> = stages.iter().map(|s| position(&text, s)).collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "lines out of order:\n{text}"
        );

        let report = &result.report;
        assert!(text.contains("⏱️  Total Execution Time: "));
        assert!(text.contains(&format!("🎯 Overall Status: {}\n", result.verdict.overall)));
        assert!(text.contains("🤖 AI Confidence: 0.95\n"));
        assert!(text.ends_with(&format!(
            "📊 Test Results: {}/{} passed ({})\n",
            report.passed,
            report.total,
            report.pass_rate_display()
        )));
    }

    #[tokio::test]
    async fn test_full_run_summary_by_risk() {
        let mut config = SimulatorConfig::default();
        config.outcome = OutcomePolicy {
            failure_probability: 0.0,
            ..OutcomePolicy::default()
        };
        let (_, text) = render_run(&config, 2).await;
        assert!(text.contains("🎯 Overall Status: SUCCESS\n"));
        assert!(text.contains("📊 Test Results: 11/12 passed (91.7%)\n"));
        assert!(text.contains("✅ Pipeline executed successfully with 91.7% pass rate"));

        config.overrides = config.overrides.with_forced_failure("TC001");
        let (_, text) = render_run(&config, 2).await;
        assert!(text.contains("🎯 Overall Status: PARTIAL SUCCESS\n"));
        assert!(text.contains("📊 Test Results: 10/12 passed (83.3%)\n"));
        assert!(text.contains("⚠️  2 test(s) require attention"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_surfaces_on_finish() {
        let mut renderer = ConsoleRenderer::new(BrokenPipe, Palette::plain());
        renderer.emit(&PipelineEvent::Progress {
            message: "hello".to_string(),
        });
        let err = renderer.finish().err().expect("write error kept");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
