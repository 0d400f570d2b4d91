//! Pattern 1: Simple Builder
//!
//! Replaces a telescoping constructor. The one required value goes into
//! `builder()`; everything else is optional and defaults to zero.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutritionFacts {
    servings: u32,
    calories: u32,
    fat: u32,
}

impl NutritionFacts {
    // Entry point: the required field is a constructor argument, never a setter.
    pub fn builder(servings: u32) -> Builder {
        Builder::new(servings)
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn fat(&self) -> u32 {
        self.fat
    }
}

#[must_use = "a builder does nothing until build() is called"]
#[derive(Debug, Clone)]
pub struct Builder {
    servings: u32,
    calories: u32,
    fat: u32,
}

impl Builder {
    pub fn new(servings: u32) -> Self {
        Builder {
            servings,
            calories: 0,
            fat: 0,
        }
    }

    pub fn calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    pub fn fat(mut self, fat: u32) -> Self {
        self.fat = fat;
        self
    }

    pub fn build(self) -> NutritionFacts {
        trace!(servings = self.servings, "building nutrition facts");
        NutritionFacts {
            servings: self.servings,
            calories: self.calories,
            fat: self.fat,
        }
    }
}
