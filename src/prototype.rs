//! Pattern 5: Shallow vs Deep Copies
//!
//! `Parent` keeps its car behind `Rc<RefCell<_>>`, so the two kinds of copy
//! are observably different:
//!
//! - `shallow_copy` clones the handle. Both parents now point at one car.
//! - `deep_copy` clones the handle, then swaps in a fresh handle around a
//!   copy of the car.
//!
//! Copying is opt-in. A type that implements [`Prototype`] without
//! overriding anything reports [`IdiomError::CopyUnsupported`].
//!
//! `Parent` has no `Clone`, so `clone()` cannot quietly stand in for either:
//!
//! ```compile_fail
//! use creational_idioms::prototype::{Car, Parent};
//!
//! let p1 = Parent::new(Car::new("X"));
//! let p2 = p1.clone();
//! ```

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::debug;

use crate::error::{IdiomError, Result};

pub trait Prototype: Sized {
    /// Field-by-field copy; owned handles end up shared.
    fn shallow_copy(&self) -> Result<Self> {
        Err(IdiomError::copy_unsupported::<Self>())
    }

    /// Copy that shares no mutable sub-object with `self`.
    fn deep_copy(&self) -> Result<Self> {
        self.shallow_copy()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub model: String,
}

impl Car {
    pub fn new(model: impl Into<String>) -> Self {
        Car {
            model: model.into(),
        }
    }
}

// Plain data: a shallow copy is already independent.
impl Prototype for Car {
    fn shallow_copy(&self) -> Result<Self> {
        Ok(self.clone())
    }
}

#[derive(Debug)]
pub struct Parent {
    car: Rc<RefCell<Car>>,
}

impl Parent {
    pub fn new(car: Car) -> Self {
        Parent {
            car: Rc::new(RefCell::new(car)),
        }
    }

    /// # Panics
    ///
    /// Panics while a guard from [`car_mut`](Self::car_mut) is alive.
    pub fn car(&self) -> Ref<'_, Car> {
        self.car.borrow()
    }

    /// # Panics
    ///
    /// Panics while any other guard on this car is alive.
    pub fn car_mut(&self) -> RefMut<'_, Car> {
        self.car.borrow_mut()
    }

    pub fn shares_car_with(&self, other: &Parent) -> bool {
        Rc::ptr_eq(&self.car, &other.car)
    }
}

impl Prototype for Parent {
    fn shallow_copy(&self) -> Result<Self> {
        Ok(Parent {
            car: Rc::clone(&self.car),
        })
    }

    // Fails instead of panicking when the car is mutably borrowed.
    fn deep_copy(&self) -> Result<Self> {
        let mut copy = self.shallow_copy()?;
        let car = self.car.try_borrow()?.deep_copy()?;
        debug!(model = %car.model, "deep-copied car");
        copy.car = Rc::new(RefCell::new(car));
        Ok(copy)
    }
}

/// Owns hardware state that must not be duplicated; never opts in.
#[derive(Debug, PartialEq, Eq)]
pub struct Engine {
    serial: u64,
}

impl Engine {
    pub fn new(serial: u64) -> Self {
        Engine { serial }
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

impl Prototype for Engine {}

#[derive(Debug)]
pub struct Garage {
    pub car: Car,
    pub engine: Engine,
}

impl Prototype for Garage {
    fn deep_copy(&self) -> Result<Self> {
        Ok(Garage {
            car: self.car.deep_copy()?,
            engine: self.engine.deep_copy()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ============================================================================
    // Example: Shallow Copy Shares Sub-Objects
    // ============================================================================

    #[test]
    fn shallow_copy_shares_the_car() {
        let original = Parent::new(Car::new("X"));
        let copy = original.shallow_copy().unwrap();
        assert!(copy.shares_car_with(&original));

        copy.car_mut().model = "Y".to_string();
        assert_eq!(original.car().model, "Y");
    }

    // ============================================================================
    // Example: Deep Copy Is Independent
    // ============================================================================

    #[test]
    fn deep_copy_owns_its_car() {
        let original = Parent::new(Car::new("X"));
        let copy = original.deep_copy().unwrap();
        assert!(!copy.shares_car_with(&original));
        assert_eq!(*copy.car(), *original.car());

        copy.car_mut().model = "Y".to_string();
        assert_eq!(original.car().model, "X");

        original.car_mut().model = "Z".to_string();
        assert_eq!(copy.car().model, "Y");
    }

    #[test]
    fn deep_copy_while_car_is_borrowed_mutably_fails() {
        let original = Parent::new(Car::new("X"));
        let guard = original.car_mut();
        let err = original.deep_copy().unwrap_err();
        assert!(matches!(err, IdiomError::Borrowed(_)));
        drop(guard);

        let copy = original.deep_copy().unwrap();
        assert_eq!(copy.car().model, "X");
    }

    #[test]
    fn deep_copy_while_car_is_read_succeeds() {
        let original = Parent::new(Car::new("X"));
        let reader = original.car();
        let copy = original.deep_copy().unwrap();
        assert_eq!(*copy.car(), *reader);
    }

    proptest! {
        #[test]
        fn deep_copy_is_independent_for_any_model(model in ".*", replacement in ".*") {
            let original = Parent::new(Car::new(model.clone()));
            let copy = original.deep_copy().unwrap();
            prop_assert!(!copy.shares_car_with(&original));
            prop_assert_eq!(&*copy.car(), &*original.car());

            copy.car_mut().model = replacement.clone();
            prop_assert_eq!(&original.car().model, &model);
            prop_assert_eq!(&copy.car().model, &replacement);
        }
    }

    #[test]
    fn car_copies_are_equal_values() {
        let car = Car::new("Roadster");
        assert_eq!(car.deep_copy().unwrap(), car);
    }

    // ============================================================================
    // Example: Types That Never Opted In
    // ============================================================================

    #[test]
    fn engine_refuses_to_copy() {
        let engine = Engine::new(42);
        let err = engine.deep_copy().unwrap_err();
        assert!(err.is_copy_unsupported());
        assert!(err.to_string().contains("Engine"));
        assert_eq!(engine.serial(), 42);
    }

    #[test]
    fn failure_propagates_through_owner() {
        let garage = Garage {
            car: Car::new("X"),
            engine: Engine::new(7),
        };
        match garage.deep_copy() {
            Err(IdiomError::CopyUnsupported { type_name }) => assert!(type_name.ends_with("Engine")),
            other => panic!("expected CopyUnsupported, got {:?}", other),
        }
        assert!(garage.shallow_copy().unwrap_err().is_copy_unsupported());
    }
}
