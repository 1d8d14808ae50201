use std::fmt;

use eframe::egui::Color32;

/// Cor RGB de 8 bits por canal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

#[inline(always)]
pub fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, u8::MAX as i64) as u8
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }

    /// Formato CSS, ex. `rgb(255, 128, 0)`.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Extremos do degradê de `channel`: a cor com o canal em 0 e em 255.
    pub fn gradient(&self, channel: Channel) -> (Color, Color) {
        (self.with_channel(channel, 0), self.with_channel(channel, u8::MAX))
    }
}

impl Default for Color {
    fn default() -> Self {
        crate::constants::DEFAULT_COLOR
    }
}

/// Rótulo numérico, ex. `(255, 128, 0)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mid_gray() {
        assert_eq!(Color::default(), Color::new(128, 128, 128));
    }

    #[test]
    fn label_is_literal_triple() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (7, 42, 199), (128, 0, 255)] {
            let color = Color::new(r, g, b);
            assert_eq!(color.to_string(), format!("({r}, {g}, {b})"));
        }
    }

    #[test]
    fn css_uses_literal_integers() {
        assert_eq!(Color::new(255, 128, 0).css(), "rgb(255, 128, 0)");
        assert_eq!(Color::new(0, 0, 0).css(), "rgb(0, 0, 0)");
    }

    #[test]
    fn with_channel_replaces_one_field() {
        let gray = Color::default();
        assert_eq!(gray.with_channel(Channel::Red, 255), Color::new(255, 128, 128));
        assert_eq!(gray.with_channel(Channel::Green, 3), Color::new(128, 3, 128));
        assert_eq!(gray.with_channel(Channel::Blue, 0), Color::new(128, 128, 0));
    }

    #[test]
    fn channel_reads_back_written_value() {
        let color = Color::new(10, 20, 30);
        for (channel, expected) in Channel::ALL.iter().zip([10, 20, 30]) {
            assert_eq!(color.channel(*channel), expected);
        }
    }

    #[test]
    fn clamp_channel_saturates() {
        assert_eq!(clamp_channel(-5), 0);
        assert_eq!(clamp_channel(300), 255);
        assert_eq!(clamp_channel(77), 77);
        assert_eq!(clamp_channel(i64::MIN), 0);
        assert_eq!(clamp_channel(i64::MAX), 255);
    }

    #[test]
    fn gradient_holds_other_channels() {
        let color = Color::new(10, 20, 30);

        let (lo, hi) = color.gradient(Channel::Red);
        assert_eq!(lo.css(), "rgb(0, 20, 30)");
        assert_eq!(hi.css(), "rgb(255, 20, 30)");

        let (lo, hi) = color.gradient(Channel::Green);
        assert_eq!((lo, hi), (Color::new(10, 0, 30), Color::new(10, 255, 30)));

        let (lo, hi) = color.gradient(Channel::Blue);
        assert_eq!((lo, hi), (Color::new(10, 20, 0), Color::new(10, 20, 255)));
    }

    #[test]
    fn converts_to_color32() {
        let color32: Color32 = Color::new(12, 34, 56).into();
        assert_eq!(color32, Color32::from_rgb(12, 34, 56));
    }
}
