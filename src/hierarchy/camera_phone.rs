use tracing::trace;

use super::{Phone, PhoneBuilder, PhoneParts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraPhone {
    phone: Phone,
    megapixels: u32,
    zoom: u32,
}

impl CameraPhone {
    pub fn builder(megapixels: u32) -> Builder {
        Builder::new(megapixels)
    }

    pub fn size(&self) -> u32 {
        self.phone.size()
    }

    pub fn megapixels(&self) -> u32 {
        self.megapixels
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }
}

impl AsRef<Phone> for CameraPhone {
    fn as_ref(&self) -> &Phone {
        &self.phone
    }
}

#[must_use = "a builder does nothing until build() is called"]
#[derive(Debug, Clone)]
pub struct Builder {
    parts: PhoneParts,
    megapixels: u32,
    zoom: u32,
}

impl Builder {
    pub fn new(megapixels: u32) -> Self {
        Builder {
            parts: PhoneParts::default(),
            megapixels,
            zoom: 0,
        }
    }

    // Derived-only setter; still chains after `size()` because that returns `Self`.
    pub fn zoom(mut self, zoom: u32) -> Self {
        self.zoom = zoom;
        self
    }
}

impl PhoneBuilder for Builder {
    type Output = CameraPhone;

    fn parts_mut(&mut self) -> &mut PhoneParts {
        &mut self.parts
    }

    fn build(self) -> CameraPhone {
        trace!(megapixels = self.megapixels, zoom = self.zoom, "building camera phone");
        CameraPhone {
            phone: Phone::from(self.parts),
            megapixels: self.megapixels,
            zoom: self.zoom,
        }
    }
}
