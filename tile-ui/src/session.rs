//! Session state for one wizard run.
//!
//! The session moves through the four steps in order. Each transition
//! checks the current step, so a screen cannot skip ahead. [`WizardSession::reset`]
//! returns every field to its default except the chosen language.

use rust_decimal::Decimal;
use thiserror::Error;
use tile_core::{
    AreaMeasurement, AreaUnit, EstimateError, EstimateResult, Language, MIN_MANUAL_AREA,
    TileEstimator, TileSize, TileType,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    ChooseTileType,
    EnterArea,
    ChooseTileSize,
    ShowResult,
}

impl WizardStep {
    /// 1-based position in the sequence.
    pub fn number(&self) -> u8 {
        match self {
            Self::ChooseTileType => 1,
            Self::EnterArea => 2,
            Self::ChooseTileSize => 3,
            Self::ShowResult => 4,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("step {} was requested while on step {}", .expected.number(), .actual.number())]
    OutOfOrder {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("area must be at least {min}, got {0}", min = MIN_MANUAL_AREA)]
    AreaBelowMinimum(Decimal),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    step: WizardStep,
    tile_type: Option<TileType>,
    area: Decimal,
    unit: AreaUnit,
    tile_size: TileSize,
    result: Option<EstimateResult>,
    language: Language,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new(Language::En)
    }
}

impl WizardSession {
    pub fn new(language: Language) -> Self {
        Self {
            step: WizardStep::ChooseTileType,
            tile_type: None,
            area: Decimal::ZERO,
            unit: AreaUnit::SquareFeet,
            tile_size: TileSize::TwelveByTwelve,
            result: None,
            language,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn tile_type(&self) -> Option<TileType> {
        self.tile_type
    }

    pub fn area(&self) -> AreaMeasurement {
        AreaMeasurement::new(self.area, self.unit)
    }

    pub fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    pub fn result(&self) -> Option<EstimateResult> {
        self.result
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(
        &mut self,
        language: Language,
    ) {
        self.language = language;
    }

    /// Step 1: floor or wall.
    pub fn choose_tile_type(
        &mut self,
        tile_type: TileType,
    ) -> Result<(), SessionError> {
        self.expect_step(WizardStep::ChooseTileType)?;
        self.tile_type = Some(tile_type);
        self.step = WizardStep::EnterArea;
        Ok(())
    }

    /// Step 2, typed area. Values below [`MIN_MANUAL_AREA`] are rejected and
    /// the session stays on this step.
    pub fn enter_manual_area(
        &mut self,
        value: Decimal,
        unit: AreaUnit,
    ) -> Result<(), SessionError> {
        self.expect_step(WizardStep::EnterArea)?;
        if value < MIN_MANUAL_AREA {
            return Err(SessionError::AreaBelowMinimum(value));
        }
        self.area = value;
        self.unit = unit;
        self.step = WizardStep::ChooseTileSize;
        Ok(())
    }

    /// Step 2, area detected from an image, in square feet. Not bounded
    /// below: a blank image yields zero.
    pub fn enter_detected_area(
        &mut self,
        square_feet: Decimal,
    ) -> Result<(), SessionError> {
        self.expect_step(WizardStep::EnterArea)?;
        self.area = square_feet;
        self.unit = AreaUnit::SquareFeet;
        self.step = WizardStep::ChooseTileSize;
        Ok(())
    }

    /// Step 3: pick a preset and compute the estimate.
    pub fn choose_tile_size(
        &mut self,
        tile_size: TileSize,
    ) -> Result<EstimateResult, SessionError> {
        self.expect_step(WizardStep::ChooseTileSize)?;
        let result = TileEstimator::new().estimate(self.area(), tile_size.dimensions())?;
        self.tile_size = tile_size;
        self.result = Some(result);
        self.step = WizardStep::ShowResult;
        Ok(result)
    }

    /// Start over. The language choice is kept.
    pub fn reset(&mut self) {
        debug!("resetting wizard session");
        *self = Self::new(self.language);
    }

    fn expect_step(
        &self,
        expected: WizardStep,
    ) -> Result<(), SessionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(SessionError::OutOfOrder {
                expected,
                actual: self.step,
            })
        }
    }
}
