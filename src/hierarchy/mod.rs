//! Pattern 2: Hierarchical Builder
//!
//! A family of builders shares its base setters through [`PhoneBuilder`].
//! Every provided setter returns `Self`, so calling a base setter on a derived
//! builder hands back the derived builder and derived-only setters can still
//! follow it:
//!
//! ```
//! use creational_idioms::hierarchy::camera_phone;
//! use creational_idioms::PhoneBuilder;
//!
//! let phone = camera_phone::Builder::new(48).size(6).zoom(3).build();
//! assert_eq!((phone.size(), phone.megapixels(), phone.zoom()), (6, 48, 3));
//! ```
//!
//! A builder only has the setters of its own type, so misuse is a compile
//! error rather than a runtime one:
//!
//! ```compile_fail
//! use creational_idioms::hierarchy::speed_phone;
//! use creational_idioms::PhoneBuilder;
//!
//! // SpeedPhone has no zoom.
//! let phone = speed_phone::Builder::new(20).size(10).zoom(3).build();
//! ```

pub mod camera_phone;
pub mod speed_phone;

pub use camera_phone::CameraPhone;
pub use speed_phone::SpeedPhone;

/// Staged base fields, shared by every builder in the family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneParts {
    size: u32,
}

/// The immutable base value carried by every phone type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone {
    size: u32,
}

impl Phone {
    pub fn size(&self) -> u32 {
        self.size
    }
}

impl From<PhoneParts> for Phone {
    fn from(parts: PhoneParts) -> Self {
        Phone { size: parts.size }
    }
}

impl AsRef<Phone> for Phone {
    fn as_ref(&self) -> &Phone {
        self
    }
}

/// Base builder for the phone family.
///
/// Implementors supply the staging area through [`parts_mut`](Self::parts_mut)
/// and the final step through [`build`](Self::build); the base setters come
/// for free and keep the implementor's own type.
pub trait PhoneBuilder: Sized {
    type Output: AsRef<Phone>;

    /// Access to the staged base fields of this builder.
    fn parts_mut(&mut self) -> &mut PhoneParts;

    fn build(self) -> Self::Output;

    fn size(mut self, size: u32) -> Self {
        self.parts_mut().size = size;
        self
    }
}

/// Drives any builder of the family through its base setters.
pub fn assemble_with_size<B: PhoneBuilder>(builder: B, size: u32) -> B::Output {
    builder.size(size).build()
}
