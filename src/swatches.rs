use crate::types::Color;

pub struct Swatch {
    pub name: &'static str,
    pub color: Color,
}

impl Swatch {
    const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { name, color: Color::new(r, g, b) }
    }

    // rótulo de acessibilidade do botão
    pub fn label(&self) -> String {
        format!("Color RGB({}, {}, {})", self.color.r, self.color.g, self.color.b)
    }
}

pub static SWATCHES: [Swatch; 16] = [
    Swatch::new("Red", 255, 0, 0),
    Swatch::new("Green", 0, 255, 0),
    Swatch::new("Blue", 0, 0, 255),
    Swatch::new("Yellow", 255, 255, 0),
    Swatch::new("Magenta", 255, 0, 255),
    Swatch::new("Cyan", 0, 255, 255),
    Swatch::new("White", 255, 255, 255),
    Swatch::new("Black", 0, 0, 0),
    Swatch::new("Orange", 255, 128, 0),
    Swatch::new("Purple", 128, 0, 128),
    Swatch::new("Dark Green", 0, 128, 0),
    Swatch::new("Gray", 128, 128, 128),
    Swatch::new("Pink", 255, 192, 203),
    Swatch::new("Brown", 165, 42, 42),
    Swatch::new("Gold", 255, 165, 0),
    Swatch::new("Indigo", 75, 0, 130),
];
