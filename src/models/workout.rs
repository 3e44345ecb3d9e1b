// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout variants and their distance, speed and calorie formulas.
//!
//! Every variant carries the shared [`Training`] fields. Distance and mean
//! speed have default formulas on [`Workout`]; calories are per variant.

use crate::error::{AppError, Result};
use crate::models::InfoMessage;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Calculations shared by all workout variants.
pub trait Workout {
    /// Variant name shown in reports.
    fn training_type(&self) -> &'static str;

    /// Shared sensor fields.
    fn base(&self) -> &Training;

    /// Distance covered by one action, in meters.
    fn len_step_m(&self) -> f64 {
        Training::LEN_STEP_M
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        self.base().action as f64 * self.len_step_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration_h
    }

    /// Energy spent in kcal.
    fn spent_calories(&self) -> Result<f64>;

    /// Compute a fresh summary of this workout.
    fn show_training_info(&self) -> Result<InfoMessage> {
        Ok(InfoMessage {
            training_type: self.training_type().to_string(),
            duration_h: self.base().duration_h,
            distance_km: self.distance(),
            speed_kmh: self.mean_speed(),
            calories_kcal: self.spent_calories()?,
        })
    }
}

/// Sensor fields common to every workout.
///
/// On its own this is the abstract base: it has distance and speed but
/// no calorie formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    /// Steps, strides or strokes
    pub action: u64,
    /// Duration in hours (must be > 0 for meaningful results)
    pub duration_h: f64,
    /// Athlete weight in kg
    pub weight_kg: f64,
}

impl Training {
    pub const LEN_STEP_M: f64 = 0.65;

    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

impl Workout for Training {
    fn training_type(&self) -> &'static str {
        "Training"
    }

    fn base(&self) -> &Training {
        self
    }

    fn spent_calories(&self) -> Result<f64> {
        Err(AppError::UnimplementedOperation("spent_calories"))
    }
}

/// Running workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: Training,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            base: Training::new(action, duration_h, weight_kg),
        }
    }
}

impl Workout for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn base(&self) -> &Training {
        &self.base
    }

    fn spent_calories(&self) -> Result<f64> {
        let b = &self.base;
        Ok((Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * b.weight_kg
            / M_IN_KM
            * b.duration_h
            * MIN_IN_H)
    }
}

/// Sports walking workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: Training,
    /// Athlete height in cm
    pub height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: Training::new(action, duration_h, weight_kg),
            height_cm,
        }
    }
}

impl Workout for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn base(&self) -> &Training {
        &self.base
    }

    // The speed/height term is floor-divided, so it only contributes once
    // speed^2 reaches the height.
    fn spent_calories(&self) -> Result<f64> {
        let b = &self.base;
        let speed_term = floor_div(self.mean_speed().powi(2), self.height_cm);
        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * b.weight_kg
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * b.weight_kg)
            * (b.duration_h * MIN_IN_H))
    }
}

/// Swimming workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: Training,
    /// Pool length in meters
    pub length_pool_m: f64,
    /// Number of pool lengths swum
    pub count_pool: f64,
}

impl Swimming {
    pub const LEN_STEP_M: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            base: Training::new(action, duration_h, weight_kg),
            length_pool_m,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn base(&self) -> &Training {
        &self.base
    }

    fn len_step_m(&self) -> f64 {
        Self::LEN_STEP_M
    }

    /// Pool-based speed; ignores the stroke count.
    fn mean_speed(&self) -> f64 {
        self.length_pool_m * self.count_pool / M_IN_KM / self.base.duration_h
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg)
    }
}

/// The closed set of workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    /// Sensor tag identifying this kind in input packages.
    pub const fn tag(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Number of positional data values the kind is built from.
    pub const fn arity(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    /// Name shown in reports.
    pub const fn name(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }
}

/// A concrete workout of one of the known kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Running(_) => ActivityKind::Running,
            Activity::SportsWalking(_) => ActivityKind::SportsWalking,
            Activity::Swimming(_) => ActivityKind::Swimming,
        }
    }

    fn as_workout(&self) -> &dyn Workout {
        match self {
            Activity::Running(w) => w,
            Activity::SportsWalking(w) => w,
            Activity::Swimming(w) => w,
        }
    }
}

impl Workout for Activity {
    fn training_type(&self) -> &'static str {
        self.as_workout().training_type()
    }

    fn base(&self) -> &Training {
        self.as_workout().base()
    }

    fn len_step_m(&self) -> f64 {
        self.as_workout().len_step_m()
    }

    fn distance(&self) -> f64 {
        self.as_workout().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_workout().mean_speed()
    }

    fn spent_calories(&self) -> Result<f64> {
        self.as_workout().spent_calories()
    }
}

impl From<Running> for Activity {
    fn from(w: Running) -> Self {
        Activity::Running(w)
    }
}

impl From<SportsWalking> for Activity {
    fn from(w: SportsWalking) -> Self {
        Activity::SportsWalking(w)
    }
}

impl From<Swimming> for Activity {
    fn from(w: Swimming) -> Self {
        Activity::Swimming(w)
    }
}

/// Floor division with the rounding of a float `//` operator: the quotient
/// is taken from `a - a % b` and snapped to the nearest whole number.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
