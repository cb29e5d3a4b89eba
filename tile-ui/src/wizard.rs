//! Terminal wizard.
//!
//! Reads answers line by line from any [`BufRead`] and writes prompts to any
//! [`Write`], so a whole run can be scripted. Every line shown to the user
//! goes through the [`TranslationAdapter`] first. End of input ends the run
//! the same way `q` does.

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tile_core::{
    AreaUnit, DeliveryStatus, EstimateNotifier, Language, MailTransport, TileSize, TileType,
    TranslationAdapter, suggestions_for,
};
use tile_data::{ImageAreaError, ImageUpload};
use tracing::{debug, info};

use crate::session::{WizardSession, WizardStep};
use crate::utils::{is_yes, parse_area_input, parse_menu_choice};

/// Whether the wizard keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Wizard<'a, R, W> {
    input: R,
    output: W,
    translator: &'a TranslationAdapter,
    mailer: &'a dyn MailTransport,
    temp_dir: PathBuf,
    session: WizardSession,
}

impl<'a, R: BufRead, W: Write> Wizard<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        translator: &'a TranslationAdapter,
        mailer: &'a dyn MailTransport,
        language: Language,
    ) -> Self {
        Self {
            input,
            output,
            translator,
            mailer,
            temp_dir: PathBuf::from("."),
            session: WizardSession::new(language),
        }
    }

    /// Directory uploads are staged in. Defaults to the working directory.
    pub fn with_temp_dir(
        mut self,
        temp_dir: impl Into<PathBuf>,
    ) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Runs until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, on image files that exist but cannot be
    /// processed, and on estimates too large to represent.
    pub async fn run(&mut self) -> Result<()> {
        self.say("Welcome to the Tile Estimator!").await?;

        loop {
            let flow = match self.session.step() {
                WizardStep::ChooseTileType => self.choose_tile_type().await?,
                WizardStep::EnterArea => self.enter_area().await?,
                WizardStep::ChooseTileSize => self.choose_tile_size().await?,
                WizardStep::ShowResult => self.show_result().await?,
            };

            if flow == Flow::Quit {
                info!("wizard finished");
                return Ok(());
            }
        }
    }

    // ── steps ────────────────────────────────────────────────────────────

    async fn choose_tile_type(&mut self) -> Result<Flow> {
        self.say("Step 1: Choose tile type").await?;
        for (idx, tile_type) in TileType::all().iter().enumerate() {
            self.say(&format!("{}. {}", idx + 1, tile_type.label()))
                .await?;
        }
        self.say("[l] change language").await?;

        loop {
            let Some(answer) = self.ask("Select tile type:").await? else {
                return Ok(Flow::Quit);
            };
            if answer.eq_ignore_ascii_case("l") {
                if self.change_language().await? == Flow::Quit {
                    return Ok(Flow::Quit);
                }
                continue;
            }
            match parse_menu_choice(&answer, TileType::all(), TileType::label) {
                Some(tile_type) => {
                    self.session.choose_tile_type(tile_type)?;
                    return Ok(Flow::Continue);
                }
                None => self.say("Please choose one of the listed options.").await?,
            }
        }
    }

    async fn enter_area(&mut self) -> Result<Flow> {
        self.say("Step 2: Enter area").await?;

        let upload = loop {
            let Some(answer) = self
                .ask("Image of the area (jpg, jpeg or png path), or press Enter to type the area:")
                .await?
            else {
                return Ok(Flow::Quit);
            };
            if answer.is_empty() {
                break None;
            }
            match ImageUpload::from_path(Path::new(&answer)) {
                Ok(upload) => break Some(upload),
                Err(ImageAreaError::UnsupportedType { file_name }) => {
                    debug!(%file_name, "rejected upload");
                    self.say("Unsupported file type. Please upload a jpg, jpeg or png image.")
                        .await?;
                }
                Err(e) => return Err(e).with_context(|| format!("cannot read upload {answer}")),
            }
        };

        if let Some(upload) = upload {
            let Some(answer) = self
                .ask("Use uploaded image to estimate area? (y/n)")
                .await?
            else {
                return Ok(Flow::Quit);
            };
            if is_yes(&answer) {
                let area = upload
                    .estimate_area(&self.temp_dir)
                    .with_context(|| format!("cannot measure {}", upload.file_name()))?;
                self.say(&format!("Estimated area from image: {area} sq.ft"))
                    .await?;
                self.session.enter_detected_area(area)?;
                return Ok(Flow::Continue);
            }
        }

        self.enter_manual_area().await
    }

    async fn enter_manual_area(&mut self) -> Result<Flow> {
        let value = loop {
            let Some(answer) = self.ask("Enter area:").await? else {
                return Ok(Flow::Quit);
            };
            match parse_area_input(&answer) {
                Ok(value) => break value,
                Err(e) => {
                    debug!(%e, "area re-prompt");
                    self.say("Please enter a number of at least 1.0.").await?;
                }
            }
        };

        let unit = loop {
            let Some(answer) = self.ask("Unit (sqft/sqm) [sqft]:").await? else {
                return Ok(Flow::Quit);
            };
            if answer.is_empty() {
                break AreaUnit::SquareFeet;
            }
            match AreaUnit::parse(&answer) {
                Some(unit) => break unit,
                None => self.say("Please enter sqft or sqm.").await?,
            }
        };

        self.session.enter_manual_area(value, unit)?;
        Ok(Flow::Continue)
    }

    async fn choose_tile_size(&mut self) -> Result<Flow> {
        self.say("Step 3: Choose tile size (inches)").await?;
        for (idx, size) in TileSize::all().iter().enumerate() {
            self.say(&format!("{}. {}", idx + 1, size.label())).await?;
        }

        loop {
            let Some(answer) = self.ask("Select tile size:").await? else {
                return Ok(Flow::Quit);
            };
            match parse_menu_choice(&answer, TileSize::all(), TileSize::label) {
                Some(size) => {
                    self.session
                        .choose_tile_size(size)
                        .context("estimate failed")?;
                    return Ok(Flow::Continue);
                }
                None => self.say("Please choose one of the listed options.").await?,
            }
        }
    }

    async fn show_result(&mut self) -> Result<Flow> {
        let Some(result) = self.session.result() else {
            // Unreachable through the step sequence; start over if it happens.
            self.session.reset();
            return Ok(Flow::Continue);
        };

        self.say(&format!(
            "You will need approximately {} tiles (~{} boxes).",
            result.tiles, result.boxes
        ))
        .await?;
        self.say("Including 10% buffer for wastage.").await?;

        loop {
            let Some(answer) = self
                .ask("[s] suggestions, [e] email estimate, [l] change language, [r] start over, [q] quit:")
                .await?
            else {
                return Ok(Flow::Quit);
            };

            match answer.to_ascii_lowercase().as_str() {
                "s" => self.show_suggestions().await?,
                "e" => {
                    if self.email_estimate().await? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                "l" => {
                    if self.change_language().await? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                "r" => {
                    self.session.reset();
                    return Ok(Flow::Continue);
                }
                "q" => {
                    self.say("Thanks for using our Tile Calculator Bot!").await?;
                    return Ok(Flow::Quit);
                }
                _ => self.say("Please choose one of the listed options.").await?,
            }
        }
    }

    // ── result actions ───────────────────────────────────────────────────

    async fn show_suggestions(&mut self) -> Result<()> {
        let Some(tile_type) = self.session.tile_type() else {
            return Ok(());
        };
        self.say(&format!("Suggested {} tiles:", tile_type.as_str()))
            .await?;
        for suggestion in suggestions_for(tile_type) {
            self.say(&format!("- {suggestion}")).await?;
        }
        Ok(())
    }

    async fn email_estimate(&mut self) -> Result<Flow> {
        let Some(address) = self.ask("Enter your email address:").await? else {
            return Ok(Flow::Quit);
        };
        let Some(result) = self.session.result() else {
            return Ok(Flow::Continue);
        };
        if address.is_empty() {
            return Ok(Flow::Continue);
        }

        let status = EstimateNotifier::new(self.mailer)
            .send_estimate(&address, result)
            .await;
        match status {
            DeliveryStatus::Sent => self.say("Estimate emailed successfully!").await?,
            DeliveryStatus::Failed(description) => {
                self.say(&format!("Error: {description}")).await?
            }
        }
        Ok(Flow::Continue)
    }

    async fn change_language(&mut self) -> Result<Flow> {
        for (idx, language) in Language::all().iter().enumerate() {
            self.say(&format!(
                "{}. {} ({})",
                idx + 1,
                language.native_name(),
                language.code()
            ))
            .await?;
        }

        loop {
            let Some(answer) = self.ask("Select language:").await? else {
                return Ok(Flow::Quit);
            };
            let choice = Language::parse(&answer)
                .or_else(|| parse_menu_choice(&answer, Language::all(), Language::code));
            match choice {
                Some(language) => {
                    debug!(code = language.code(), "language changed");
                    self.session.set_language(language);
                    return Ok(Flow::Continue);
                }
                None => self.say("Please choose one of the listed options.").await?,
            }
        }
    }

    // ── I/O ──────────────────────────────────────────────────────────────

    async fn say(
        &mut self,
        text: &str,
    ) -> Result<()> {
        let line = self
            .translator
            .translate_text(text, self.session.language())
            .await;
        writeln!(self.output, "{}", line.as_str()).context("failed to write output")?;
        Ok(())
    }

    /// Shows `prompt` and reads one trimmed answer; `None` at end of input.
    async fn ask(
        &mut self,
        prompt: &str,
    ) -> Result<Option<String>> {
        let line = self
            .translator
            .translate_text(prompt, self.session.language())
            .await;
        write!(self.output, "{} ", line.as_str()).context("failed to write output")?;
        self.output.flush().context("failed to flush output")?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("failed to read input")?;
        if read == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }
}
