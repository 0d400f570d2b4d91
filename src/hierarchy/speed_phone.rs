use tracing::trace;

use super::{Phone, PhoneBuilder, PhoneParts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedPhone {
    phone: Phone,
    speed: u32,
}

impl SpeedPhone {
    pub fn builder(speed: u32) -> Builder {
        Builder::new(speed)
    }

    pub fn size(&self) -> u32 {
        self.phone.size()
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }
}

impl AsRef<Phone> for SpeedPhone {
    fn as_ref(&self) -> &Phone {
        &self.phone
    }
}

#[must_use = "a builder does nothing until build() is called"]
#[derive(Debug, Clone)]
pub struct Builder {
    parts: PhoneParts,
    speed: u32,
}

impl Builder {
    pub fn new(speed: u32) -> Self {
        Builder {
            parts: PhoneParts::default(),
            speed,
        }
    }
}

impl PhoneBuilder for Builder {
    type Output = SpeedPhone;

    fn parts_mut(&mut self) -> &mut PhoneParts {
        &mut self.parts
    }

    fn build(self) -> SpeedPhone {
        trace!(speed = self.speed, size = self.parts.size, "building speed phone");
        SpeedPhone {
            phone: Phone::from(self.parts),
            speed: self.speed,
        }
    }
}
