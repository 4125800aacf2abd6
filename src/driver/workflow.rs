//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::file_export_repository::FileExportRepository;
use crate::application::use_cases::clear_history::ClearHistoryUseCase;
use crate::application::use_cases::convert_units::ConvertUnitsUseCase;
use crate::application::use_cases::export_history::ExportHistoryUseCase;
use crate::application::use_cases::view_history::ViewHistoryUseCase;
use crate::domain::entities::category::Category;
use crate::domain::entities::conversion_request::ConversionRequest;
use crate::domain::entities::conversion_table::ConversionTable;
use crate::domain::entities::session::ConversionSession;

use super::cli::{Args, Command};
use super::repl::{parse_line, ReplCommand, HELP_TEXT};
use super::view_state::ViewState;

/// Unit Converter Workflow
pub struct ConverterWorkflow {
    config: Config,
    table: Arc<ConversionTable>,
    convert_use_case: ConvertUnitsUseCase,
    view_use_case: ViewHistoryUseCase,
    export_use_case: ExportHistoryUseCase<FileExportRepository>,
}

impl ConverterWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let table = Arc::new(ConversionTable::standard()?);

        let convert_use_case = ConvertUnitsUseCase::new(table.clone());
        let view_use_case = ViewHistoryUseCase::new(config.history_display_limit);
        let export_use_case = ExportHistoryUseCase::new(Arc::new(FileExportRepository::new()));

        Ok(Self {
            config,
            table,
            convert_use_case,
            view_use_case,
            export_use_case,
        })
    }

    /// Execute the command selected on the command line
    pub async fn execute(&self, args: Args) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match args.command.unwrap_or(Command::Repl) {
            Command::Repl => {
                let stdin = std::io::stdin();
                self.run_interactive(stdin.lock(), &mut out).await
            }
            Command::Convert {
                category,
                value,
                from,
                to,
            } => self.convert_once(&category, value, &from, &to, &mut out),
            Command::Units { category } => self.list_units(category.as_deref(), &mut out),
        }
    }

    /// One-shot conversion (the session ends right after it)
    pub fn convert_once<W: Write>(
        &self,
        category: &str,
        value: f64,
        from: &str,
        to: &str,
        out: &mut W,
    ) -> Result<()> {
        let category: Category = category.parse()?;
        let mut session = ConversionSession::new();
        let request = ConversionRequest::new(category, value, from, to);

        let outcome = self.convert_use_case.execute(&mut session, &request)?;
        writeln!(out, "{}", outcome.text)?;
        Ok(())
    }

    /// List all categories, or the units of one category
    pub fn list_units<W: Write>(&self, category: Option<&str>, out: &mut W) -> Result<()> {
        match category {
            Some(name) => {
                let category: Category = name.parse()?;
                self.write_units(category, out)?;
            }
            None => {
                for category in Category::ALL {
                    writeln!(out, "{}: {}", category, self.table.units(category).join(", "))?;
                }
            }
        }
        Ok(())
    }

    /// Run an interactive session until `quit` or end of input
    pub async fn run_interactive<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        let mut session = ConversionSession::new();
        let mut view = ViewState::from_config(&self.config);
        info!("Starting session {}", session.id());

        writeln!(out, "Unit Converter (type 'help' for commands)")?;
        writeln!(out, "✓ Category: {}", view.category)?;

        let mut lines = input.lines();
        loop {
            write!(out, "[{}] > ", view.category)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line?;

            let command = match parse_line(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "✗ {}", e)?;
                    continue;
                }
            };
            debug!("Command: {:?}", command);

            if command == ReplCommand::Quit {
                break;
            }
            self.handle(command, &mut session, &mut view, out).await?;
        }

        info!(
            "Session {} (started {}) ended with {} history entries",
            session.id(),
            session.started_at().to_rfc3339(),
            session.history().len()
        );
        Ok(())
    }

    /// Apply one interactive command; command failures are reported, not returned
    async fn handle<W: Write>(
        &self,
        command: ReplCommand,
        session: &mut ConversionSession,
        view: &mut ViewState,
        out: &mut W,
    ) -> Result<()> {
        match command {
            ReplCommand::Help => writeln!(out, "{}", HELP_TEXT)?,
            ReplCommand::Categories => {
                let names: Vec<&str> = Category::ALL.iter().map(Category::name).collect();
                writeln!(out, "{}", names.join(", "))?;
            }
            ReplCommand::SelectCategory(name) => match name.parse::<Category>() {
                Ok(category) => {
                    view.category = category;
                    writeln!(out, "✓ Category: {}", category)?;
                    self.write_units(category, out)?;
                }
                Err(e) => writeln!(out, "✗ {}", e)?,
            },
            ReplCommand::Units => self.write_units(view.category, out)?,
            ReplCommand::Convert {
                value,
                from_unit,
                to_unit,
            } => {
                let request = ConversionRequest::new(view.category, value, from_unit, to_unit);
                match self.convert_use_case.execute(session, &request) {
                    Ok(outcome) => {
                        writeln!(out, "✓ {}", outcome.text)?;
                        if view.show_history {
                            self.write_history(session, out)?;
                        }
                    }
                    Err(e) => writeln!(out, "✗ {}", e)?,
                }
            }
            ReplCommand::ToggleHistory => {
                if view.toggle_history() {
                    self.write_history(session, out)?;
                } else {
                    writeln!(out, "✓ History hidden")?;
                }
            }
            ReplCommand::ClearHistory => {
                let removed = ClearHistoryUseCase::execute(session);
                writeln!(out, "✓ History cleared ({} entries removed)", removed)?;
            }
            ReplCommand::Export(dir) => {
                let dir = dir.unwrap_or_else(|| self.config.export_dir.clone());
                match self.export_use_case.execute(session, &dir).await {
                    Ok(summary) => writeln!(
                        out,
                        "✓ Exported {} entries to {}",
                        summary.entry_count,
                        summary.path.display()
                    )?,
                    Err(e) => writeln!(out, "✗ {:#}", e)?,
                }
            }
            ReplCommand::Quit | ReplCommand::Empty => {}
        }
        Ok(())
    }

    fn write_units<W: Write>(&self, category: Category, out: &mut W) -> Result<()> {
        writeln!(out, "  Units: {}", self.table.units(category).join(", "))?;
        Ok(())
    }

    fn write_history<W: Write>(&self, session: &ConversionSession, out: &mut W) -> Result<()> {
        writeln!(out, "Conversion History")?;
        let lines = self.view_use_case.execute(session);
        if session.history().is_empty() {
            writeln!(out, "  (no conversions yet)")?;
        }
        for line in lines {
            writeln!(out, "  {}", line)?;
        }
        Ok(())
    }
}
