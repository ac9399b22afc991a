use super::error::Error;

/// RGBA brush color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// CSS `rgba()` value with alpha mapped into 0..=1.
    pub fn as_css_value(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    #[inline]
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
    }
}

/// Color channel editable from the picker panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Id of the numeric input bound to this channel.
    pub fn input_id(self) -> &'static str {
        match self {
            Channel::Red => "color-picker-red",
            Channel::Green => "color-picker-green",
            Channel::Blue => "color-picker-blue",
        }
    }

    pub fn from_input_id(id: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.input_id() == id)
            .ok_or_else(|| Error::UnknownChannel(id.to_string()))
    }
}

/// Normalize whatever was typed into a channel input.
///
/// Non-digits are dropped, an empty result reads as 0 and anything above 255
/// saturates. Leading zeros disappear because the digits are folded into a
/// number.
pub fn sanitize_channel_input(raw: &str) -> u8 {
    let value = raw
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d));
    value.min(u8::MAX as u32) as u8
}

/// Read a channel input back into a value; unreadable text is full intensity.
#[inline]
pub fn parse_channel(raw: &str) -> u8 {
    raw.trim().parse::<u8>().unwrap_or(u8::MAX)
}
